mod common;

use std::sync::{Arc, Mutex};

use common::{data_file, item};
use roadmap_mocks::config::{DataSource, MockOptions};
use roadmap_mocks::error::ServerError;
use roadmap_mocks::mock_runner_with_options;
use roadmap_mocks::types::RoadmapItemStatus;

fn recording_runner(
    options: MockOptions,
) -> (
    roadmap_mocks::runner::ScriptRunner<roadmap_mocks::mock::MockServerFunctions>,
    Arc<Mutex<Vec<serde_json::Value>>>,
    Arc<Mutex<Vec<ServerError>>>,
) {
    let successes = Arc::new(Mutex::new(Vec::new()));
    let failures = Arc::new(Mutex::new(Vec::new()));

    let success_sink = successes.clone();
    let failure_sink = failures.clone();
    let runner = mock_runner_with_options(options)
        .with_success_handler(move |value| success_sink.lock().unwrap().push(value))
        .with_failure_handler(move |err| failure_sink.lock().unwrap().push(err));

    (runner, successes, failures)
}

#[tokio::test]
async fn success_handler_receives_roadmap_json() {
    let file = data_file(
        r#"[{"id":"1","title":"A","owner":"X","startPi":"PI1","endPi":"PI2","status":"planned"}]"#,
    );
    let options =
        MockOptions::default().with_data_source(DataSource::Path(file.path().to_path_buf()));
    let (runner, successes, failures) = recording_runner(options);

    let value = runner.run("getRoadmapData", vec![]).await.unwrap();

    let expected = serde_json::json!([
        {"id":"1","title":"A","owner":"X","startPi":"PI1","endPi":"PI2","status":"planned"}
    ]);
    assert_eq!(value, expected);
    assert_eq!(*successes.lock().unwrap(), vec![expected]);
    assert!(failures.lock().unwrap().is_empty());
}

#[tokio::test]
async fn load_failure_still_reaches_success_handler_with_null() {
    let dir = tempfile::tempdir().unwrap();
    let options = MockOptions::default()
        .with_data_source(DataSource::Path(dir.path().join("missing.json")));
    let (runner, successes, failures) = recording_runner(options);

    let value = runner.get_roadmap_data().await.unwrap();

    assert_eq!(value, serde_json::Value::Null);
    assert_eq!(*successes.lock().unwrap(), vec![serde_json::Value::Null]);
    assert!(failures.lock().unwrap().is_empty());
}

#[tokio::test]
async fn update_by_name_resolves_true() {
    let (runner, successes, _) = recording_runner(MockOptions::default());
    let arg = serde_json::json!({
        "id": "2",
        "title": "B",
        "owner": "Y",
        "startPi": "PI1",
        "endPi": "PI1",
        "status": "",
    });

    let value = runner.run("updateRoadmapItem", vec![arg]).await.unwrap();

    assert_eq!(value, serde_json::json!(true));
    assert_eq!(*successes.lock().unwrap(), vec![serde_json::json!(true)]);
}

#[tokio::test]
async fn typed_update_resolves_true() {
    let (runner, _, failures) = recording_runner(MockOptions::default());

    let value = runner
        .update_roadmap_item(item("7", "G", RoadmapItemStatus::Completed))
        .await
        .unwrap();

    assert_eq!(value, serde_json::json!(true));
    assert!(failures.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_function_reaches_failure_handler() {
    let (runner, successes, failures) = recording_runner(MockOptions::default());

    let err = runner.run("deleteRoadmap", vec![]).await.unwrap_err();

    assert_eq!(err.name.as_deref(), Some("UnknownServerFunction"));
    assert!(successes.lock().unwrap().is_empty());
    assert_eq!(*failures.lock().unwrap(), vec![err]);
}

#[tokio::test]
async fn malformed_argument_reaches_failure_handler() {
    let (runner, successes, failures) = recording_runner(MockOptions::default());

    let err = runner
        .run("updateRoadmapItem", vec![serde_json::json!({"id": "1"})])
        .await
        .unwrap_err();

    assert_eq!(err.name.as_deref(), Some("InvalidArguments"));
    assert!(successes.lock().unwrap().is_empty());
    assert_eq!(failures.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn runner_without_handlers_still_resolves() {
    let runner = mock_runner_with_options(
        MockOptions::default().with_data_source(DataSource::Inline("[]".to_string())),
    );

    assert_eq!(
        runner.get_roadmap_data().await,
        Ok(serde_json::json!([]))
    );
}
