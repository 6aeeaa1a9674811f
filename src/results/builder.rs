use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::RpcResult;
use crate::ClusterLookup;
use crate::NodeRef;
use crate::NodeResolver;

/// Multi-node result mapping as returned by the real RPC layer: node key to
/// per-node result. Last write wins when one key is inserted more than once.
pub type ResultSet = HashMap<String, RpcResult>;

/// Fluent accumulator for multi-node RPC results.
///
/// Single results come from the `create_*` methods; multi-node sets from
/// chaining `add_*` calls and finishing with [`build`](Self::build). Nodes
/// may be passed as full records, uuids or names; uuid/name references need
/// the cluster configuration supplied at construction.
///
/// ```
/// use std::sync::Arc;
///
/// use rpc_testkit::ClusterLookup;
/// use rpc_testkit::NodeRef;
/// use rpc_testkit::RpcResultsBuilder;
/// use rpc_testkit::StaticCluster;
/// use serde_json::json;
///
/// let cluster: Arc<dyn ClusterLookup> =
///     Arc::new(StaticCluster::new().with_node("uuid-1", "node1"));
///
/// let results = RpcResultsBuilder::new(Some(cluster), false)
///     .add_successful(NodeRef::uuid("uuid-1"), json!({"result_key": "result_data"}))
///     .build();
///
/// assert!(results["uuid-1"].is_success());
/// ```
pub struct RpcResultsBuilder {
    resolver: NodeResolver,
    results: Vec<RpcResult>,
}

impl RpcResultsBuilder {
    /// New builder. `cfg` is required for resolving uuid/name references;
    /// `use_node_names` keys results by node name instead of uuid. Both are
    /// fixed for the builder's lifetime.
    pub fn new(
        cfg: Option<Arc<dyn ClusterLookup>>,
        use_node_names: bool,
    ) -> Self {
        Self {
            resolver: NodeResolver::new(cfg, use_node_names),
            results: Vec::new(),
        }
    }

    /// Single success result; does not touch builder state.
    pub fn create_successful(
        &self,
        node: impl Into<NodeRef>,
        data: Value,
    ) -> RpcResult {
        RpcResult::successful(self.resolver.node_key(&node.into()), data)
    }

    /// Single success result with the default empty payload.
    pub fn create_successful_empty(
        &self,
        node: impl Into<NodeRef>,
    ) -> RpcResult {
        RpcResult::successful_empty(self.resolver.node_key(&node.into()))
    }

    /// Single transport-failure result; does not touch builder state.
    pub fn create_failed(
        &self,
        node: impl Into<NodeRef>,
    ) -> RpcResult {
        RpcResult::failed(self.resolver.node_key(&node.into()))
    }

    /// Single offline-node result; does not touch builder state.
    pub fn create_offline(
        &self,
        node: impl Into<NodeRef>,
    ) -> RpcResult {
        RpcResult::offline(self.resolver.node_key(&node.into()))
    }

    /// Single logical-error result; does not touch builder state.
    pub fn create_error(
        &self,
        node: impl Into<NodeRef>,
        message: Option<String>,
    ) -> RpcResult {
        RpcResult::error(self.resolver.node_key(&node.into()), message)
    }

    pub fn add_successful(
        mut self,
        node: impl Into<NodeRef>,
        data: Value,
    ) -> Self {
        let result = self.create_successful(node, data);
        self.results.push(result);
        self
    }

    pub fn add_successful_empty(
        mut self,
        node: impl Into<NodeRef>,
    ) -> Self {
        let result = self.create_successful_empty(node);
        self.results.push(result);
        self
    }

    pub fn add_failed(
        mut self,
        node: impl Into<NodeRef>,
    ) -> Self {
        let result = self.create_failed(node);
        self.results.push(result);
        self
    }

    pub fn add_offline(
        mut self,
        node: impl Into<NodeRef>,
    ) -> Self {
        let result = self.create_offline(node);
        self.results.push(result);
        self
    }

    pub fn add_error(
        mut self,
        node: impl Into<NodeRef>,
        message: Option<String>,
    ) -> Self {
        let result = self.create_error(node, message);
        self.results.push(result);
        self
    }

    /// Folds the accumulated results into a [`ResultSet`].
    ///
    /// Pure with respect to builder state: a second call without further
    /// `add_*` calls returns an equal set. An empty builder builds an empty
    /// set, representing "no nodes responded".
    pub fn build(&self) -> ResultSet {
        debug!("building result set from {} entries", self.results.len());
        self.results
            .iter()
            .map(|result| (result.node().to_string(), result.clone()))
            .collect()
    }
}
