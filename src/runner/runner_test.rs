use serde_json::json;

use crate::mock_rpc_runner;
use crate::NodeRecord;
use crate::RpcResultsBuilder;
use crate::RpcRunner;

#[test]
fn test_configured_operation_returns_canned_results() {
    let record = NodeRecord::new("uuid-1", "node1.example.com");
    let canned = RpcResultsBuilder::new(None, false)
        .add_successful(&record, json!({"version": 7}))
        .build();

    let mut runner = mock_rpc_runner();
    let configured = canned.clone();
    runner
        .expect_call_version()
        .times(1)
        .returning(move |_| configured.clone());

    let results = runner.call_version(&["uuid-1".to_string()]);
    assert_eq!(results, canned);
}

#[test]
#[should_panic]
fn test_unconfigured_operation_panics() {
    mock_rpc_runner().call_node_verify(&["uuid-1".to_string()]);
}

#[test]
fn test_operations_are_configured_independently() {
    let mut runner = mock_rpc_runner();
    runner
        .expect_call_node_info()
        .returning(|_| Default::default());

    assert!(runner.call_node_info(&[]).is_empty());
    // call_instance_list stays unconfigured and would panic if invoked
}
