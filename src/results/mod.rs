//! Per-node RPC outcome records.
//!
//! Two dimensions separate the failure shapes: whether the call completed on
//! the node at all, and if it did, whether the remote operation reported
//! success. Command code branches differently on the two, so the record keeps
//! them apart: [`RpcOutcome::Failed`] means the call never completed
//! (transport failure or offline node), [`RpcOutcome::Error`] means the node
//! ran the operation and reported a logical failure.

mod builder;

pub use builder::*;


use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;

/// The three mutually exclusive outcome shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RpcOutcome {
    /// Call completed, remote operation reported success.
    Success { data: Value },

    /// Call never completed: transport failure or offline node. The caller
    /// side cannot always tell the two apart, so they share one shape.
    Failed,

    /// Call completed, remote operation reported a logical failure.
    Error { message: Option<String> },
}

/// One node's result for a single RPC dispatch. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResult {
    node: String,
    outcome: RpcOutcome,
}

impl RpcResult {
    pub fn successful(
        node: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            node: node.into(),
            outcome: RpcOutcome::Success { data },
        }
    }

    /// Success with the default empty payload.
    pub fn successful_empty(node: impl Into<String>) -> Self {
        Self::successful(node, json!({}))
    }

    /// Transport-level failure: timeout, connection refused and the like.
    pub fn failed(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            outcome: RpcOutcome::Failed,
        }
    }

    /// Offline node. Same record shape as [`failed`](Self::failed); the entry
    /// point exists so call sites state which situation they simulate.
    pub fn offline(node: impl Into<String>) -> Self {
        Self::failed(node)
    }

    /// Application-level error reported by the remote operation.
    pub fn error(
        node: impl Into<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            node: node.into(),
            outcome: RpcOutcome::Error { message },
        }
    }

    /// Node key this result is filed under (uuid or name per builder mode).
    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn outcome(&self) -> &RpcOutcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RpcOutcome::Success { .. })
    }

    /// True when the call itself never completed (the failed-transport marker).
    pub fn call_failed(&self) -> bool {
        matches!(self.outcome, RpcOutcome::Failed)
    }

    /// Success payload; present exactly when [`is_success`](Self::is_success).
    pub fn payload(&self) -> Option<&Value> {
        match &self.outcome {
            RpcOutcome::Success { data } => Some(data),
            _ => None,
        }
    }

    /// Logical-error message. `None` for non-error outcomes and for errors
    /// constructed without a message.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            RpcOutcome::Error { message } => message.as_deref(),
            _ => None,
        }
    }
}
