//! Node records, node references and the cluster lookup contract.
//!
//! Command tests address nodes loosely: a full [`NodeRecord`], a stable uuid
//! or a human-readable name, interchangeably. [`NodeRef`] makes the three
//! forms an explicit union and [`NodeResolver`] turns any of them into the
//! canonical record.

mod resolver;
mod static_cluster;

pub use resolver::*;
pub use static_cluster::*;

#[cfg(test)]
mod resolver_test;

use mockall::automock;
use serde::Deserialize;
use serde::Serialize;

/// Canonical node entity as stored in the cluster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub uuid: String,
    pub name: String,
}

impl NodeRecord {
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
        }
    }
}

/// A loosely-typed node reference as accepted by the results builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    /// Already-canonical record; resolution is a passthrough.
    Record(NodeRecord),
    /// Stable node identifier.
    Uuid(String),
    /// Human-readable node name.
    Name(String),
}

impl NodeRef {
    pub fn uuid(uuid: impl Into<String>) -> Self {
        NodeRef::Uuid(uuid.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        NodeRef::Name(name.into())
    }
}

impl From<NodeRecord> for NodeRef {
    fn from(record: NodeRecord) -> Self {
        NodeRef::Record(record)
    }
}

impl From<&NodeRecord> for NodeRef {
    fn from(record: &NodeRecord) -> Self {
        NodeRef::Record(record.clone())
    }
}

/// Read-only lookup contract onto the cluster configuration store.
///
/// The only capability consumed from the configuration collaborator.
/// [`MockClusterLookup`] lets tests script lookups directly;
/// [`StaticCluster`] covers the common fixed-fixture case.
#[automock]
pub trait ClusterLookup {
    fn node_by_uuid(
        &self,
        uuid: &str,
    ) -> Option<NodeRecord>;

    fn node_by_name(
        &self,
        name: &str,
    ) -> Option<NodeRecord>;
}
