use super::ClusterLookup;
use super::NodeRecord;

/// Fixed in-memory cluster configuration for tests.
///
/// Implements [`ClusterLookup`] over a node list assembled up front, so most
/// tests never need to script a mock collaborator.
#[derive(Debug, Clone, Default)]
pub struct StaticCluster {
    nodes: Vec<NodeRecord>,
}

impl StaticCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent variant of [`add_node`](Self::add_node).
    pub fn with_node(
        mut self,
        uuid: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.add_node(NodeRecord::new(uuid, name));
        self
    }

    pub fn add_node(
        &mut self,
        record: NodeRecord,
    ) {
        self.nodes.push(record);
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }
}

impl ClusterLookup for StaticCluster {
    fn node_by_uuid(
        &self,
        uuid: &str,
    ) -> Option<NodeRecord> {
        self.nodes.iter().find(|n| n.uuid == uuid).cloned()
    }

    fn node_by_name(
        &self,
        name: &str,
    ) -> Option<NodeRecord> {
        self.nodes.iter().find(|n| n.name == name).cloned()
    }
}
