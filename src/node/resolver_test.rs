use std::sync::Arc;

use tracing_test::traced_test;

use crate::ClusterLookup;
use crate::MockClusterLookup;
use crate::NodeRecord;
use crate::NodeRef;
use crate::NodeResolver;
use crate::ResolveError;

fn two_node_cluster() -> Arc<dyn ClusterLookup> {
    Arc::new(
        crate::StaticCluster::new()
            .with_node("uuid-1", "node1.example.com")
            .with_node("uuid-2", "node2.example.com"),
    )
}

#[traced_test]
#[test]
fn test_all_reference_forms_resolve_to_same_record() {
    let resolver = NodeResolver::new(Some(two_node_cluster()), false);
    let record = NodeRecord::new("uuid-1", "node1.example.com");

    let by_record = resolver.resolve(&NodeRef::from(&record));
    let by_uuid = resolver.resolve(&NodeRef::uuid("uuid-1"));
    let by_name = resolver.resolve(&NodeRef::name("node1.example.com"));

    assert_eq!(by_record, record);
    assert_eq!(by_uuid, record);
    assert_eq!(by_name, record);
}

#[test]
fn test_record_reference_skips_lookup() {
    // a collaborator with no expectations panics on any lookup
    let cfg = MockClusterLookup::new();
    let resolver = NodeResolver::new(Some(Arc::new(cfg)), false);

    let record = NodeRecord::new("uuid-9", "node9");
    assert_eq!(resolver.resolve(&NodeRef::from(&record)), record);
}

#[test]
fn test_falls_back_to_name_lookup() {
    let mut cfg = MockClusterLookup::new();
    cfg.expect_node_by_uuid().returning(|_| None);
    cfg.expect_node_by_name()
        .returning(|name| (name == "node3").then(|| NodeRecord::new("uuid-3", "node3")));

    let resolver = NodeResolver::new(Some(Arc::new(cfg)), false);
    let record = resolver.resolve(&NodeRef::name("node3"));
    assert_eq!(record.uuid, "uuid-3");
}

#[test]
fn test_unknown_node_is_typed_error() {
    let resolver = NodeResolver::new(Some(two_node_cluster()), false);
    let err = resolver.try_resolve(&NodeRef::uuid("missing")).unwrap_err();
    assert!(matches!(err, ResolveError::UnknownNode(key) if key == "missing"));
}

#[test]
fn test_no_config_rejects_non_record_references() {
    let resolver = NodeResolver::new(None, false);
    assert!(matches!(
        resolver.try_resolve(&NodeRef::uuid("uuid-1")),
        Err(ResolveError::NoClusterConfig(_))
    ));
    assert!(matches!(
        resolver.try_resolve(&NodeRef::name("node1.example.com")),
        Err(ResolveError::NoClusterConfig(_))
    ));
}

#[test]
fn test_no_config_still_resolves_full_records() {
    let resolver = NodeResolver::new(None, false);
    let record = NodeRecord::new("uuid-1", "node1.example.com");
    assert_eq!(resolver.resolve(&NodeRef::from(&record)), record);
}

#[test]
#[should_panic(expected = "node resolution failed")]
fn test_resolve_without_config_is_fatal() {
    NodeResolver::new(None, false).resolve(&NodeRef::uuid("uuid-1"));
}

#[test]
fn test_node_key_follows_mode() {
    let by_uuid = NodeResolver::new(Some(two_node_cluster()), false);
    let by_name = NodeResolver::new(Some(two_node_cluster()), true);
    let node = NodeRef::uuid("uuid-2");

    assert_eq!(by_uuid.node_key(&node), "uuid-2");
    assert_eq!(by_name.node_key(&node), "node2.example.com");
}
