//! Test double for the RPC runner used by cluster commands.
//!
//! The real runner fans an operation out to many nodes and returns a
//! [`ResultSet`](crate::ResultSet). Commands under test receive
//! [`MockRpcRunner`] instead, and every operation they hit must be configured
//! up front, typically with a set produced by
//! [`RpcResultsBuilder`](crate::RpcResultsBuilder). An unconfigured call
//! panics, which is the right surface for a test-authoring mistake.

#[cfg(test)]
mod runner_test;

use mockall::automock;

use crate::ResultSet;

/// Call-style capability surface of the real RPC client.
#[automock]
pub trait RpcRunner {
    /// Daemon version of each node.
    fn call_version(
        &self,
        nodes: &[String],
    ) -> ResultSet;

    /// Resource usage and hypervisor state per node.
    fn call_node_info(
        &self,
        nodes: &[String],
    ) -> ResultSet;

    /// Per-node cluster consistency verification.
    fn call_node_verify(
        &self,
        nodes: &[String],
    ) -> ResultSet;

    /// Instances each node currently hosts.
    fn call_instance_list(
        &self,
        nodes: &[String],
    ) -> ResultSet;
}

/// New runner double with no behavior configured.
pub fn mock_rpc_runner() -> MockRpcRunner {
    MockRpcRunner::new()
}
