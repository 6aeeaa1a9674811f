//! Deterministic mock RPC results for multi-node cluster command tests.
//!
//! Real cluster commands dispatch an operation to many nodes through an RPC
//! runner and receive a per-node success/failure mapping back. Exercising the
//! command logic in unit tests means constructing those mappings without a
//! live cluster: this crate resolves loose node references against a
//! configuration lookup, constructs per-node outcome records (success,
//! transport failure, offline, logical error), folds them into the mapping
//! shape the command expects and hands out a runner double that returns them.
//!
//! ```
//! use std::sync::Arc;
//!
//! use rpc_testkit::ClusterLookup;
//! use rpc_testkit::NodeRef;
//! use rpc_testkit::RpcResultsBuilder;
//! use rpc_testkit::StaticCluster;
//! use serde_json::json;
//!
//! let cluster: Arc<dyn ClusterLookup> = Arc::new(
//!     StaticCluster::new()
//!         .with_node("uuid-1", "node1.example.com")
//!         .with_node("uuid-2", "node2.example.com"),
//! );
//!
//! let results = RpcResultsBuilder::new(Some(cluster), false)
//!     .add_successful(NodeRef::name("node1.example.com"), json!({"free_mem": 2048}))
//!     .add_error(NodeRef::uuid("uuid-2"), Some("disk check failed".into()))
//!     .build();
//!
//! assert!(results["uuid-1"].is_success());
//! assert_eq!(results["uuid-2"].error_message(), Some("disk check failed"));
//! ```

mod errors;
mod node;
mod results;
mod runner;

pub use errors::*;
pub use node::*;
pub use results::*;
pub use runner::*;
