use std::sync::Arc;

use tracing::debug;

use super::ClusterLookup;
use super::NodeRecord;
use super::NodeRef;
use crate::ResolveError;
use crate::Result;

/// Resolves loosely-typed node references against an optional cluster
/// configuration.
///
/// Holds the resolver configuration fixed at builder construction: the
/// optional lookup collaborator and the key mode. Without a collaborator only
/// [`NodeRef::Record`] references are resolvable.
pub struct NodeResolver {
    cfg: Option<Arc<dyn ClusterLookup>>,
    use_node_names: bool,
}

impl NodeResolver {
    pub fn new(
        cfg: Option<Arc<dyn ClusterLookup>>,
        use_node_names: bool,
    ) -> Self {
        Self { cfg, use_node_names }
    }

    /// Resolves a reference to its canonical record.
    ///
    /// Uuid and name references consult the collaborator by identifier first,
    /// then by name, so either string form finds its node.
    pub fn try_resolve(
        &self,
        node: &NodeRef,
    ) -> Result<NodeRecord> {
        let key = match node {
            NodeRef::Record(record) => return Ok(record.clone()),
            NodeRef::Uuid(key) | NodeRef::Name(key) => key,
        };

        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| ResolveError::NoClusterConfig(key.clone()))?;

        let record = cfg
            .node_by_uuid(key)
            .or_else(|| cfg.node_by_name(key))
            .ok_or_else(|| ResolveError::UnknownNode(key.clone()))?;

        debug!("resolved '{}' to node {}", key, record.uuid);
        Ok(record)
    }

    /// Like [`try_resolve`](Self::try_resolve) but fatal on failure.
    ///
    /// An unresolvable reference is a mistake in test setup, so it aborts the
    /// current test immediately instead of reaching the code under test.
    pub fn resolve(
        &self,
        node: &NodeRef,
    ) -> NodeRecord {
        match self.try_resolve(node) {
            Ok(record) => record,
            Err(err) => panic!("node resolution failed: {err}"),
        }
    }

    /// Outward-facing key for a reference: the uuid, or the name when the
    /// resolver was built with `use_node_names`.
    pub fn node_key(
        &self,
        node: &NodeRef,
    ) -> String {
        let record = self.resolve(node);
        if self.use_node_names {
            record.name
        } else {
            record.uuid
        }
    }
}
