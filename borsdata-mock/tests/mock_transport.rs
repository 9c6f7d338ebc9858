use std::time::Duration;

use borsdata_core::{BorsdataError, HttpTransport, Sleeper};
use borsdata_mock::{MockReply, MockTransport, RecordingSleeper, fixtures};
use serde_json::json;

fn q(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[tokio::test]
async fn script_is_consumed_before_routes() {
    let t = MockTransport::new()
        .route("/branches", MockReply::ok(&json!({"branches": []})))
        .then(MockReply::rate_limited())
        .then(MockReply::transport_error("reset"));

    let first = t.get("http://x/v1/branches", &[]).await.expect("response");
    assert_eq!(first.status, 429);
    let second = t.get("http://x/v1/branches", &[]).await.expect_err("error");
    assert!(matches!(second, BorsdataError::Transport(_)));
    let third = t.get("http://x/v1/branches", &[]).await.expect("response");
    assert_eq!(third.status, 200);
    assert_eq!(t.calls().await, 3);
}

#[tokio::test]
async fn unrouted_paths_are_404() {
    let t = MockTransport::new();
    let resp = t.get("http://x/v1/nowhere", &[]).await.expect("response");
    assert_eq!(resp.status, 404);
}

#[tokio::test]
async fn requests_are_recorded_verbatim() {
    let t = MockTransport::with_fixtures();
    t.get(
        "http://x/v1/instruments/stockprices",
        &q(&[("instList", "3,999"), ("authKey", "k")]),
    )
    .await
    .expect("response");
    let reqs = t.requests().await;
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].url, "http://x/v1/instruments/stockprices");
    assert_eq!(reqs[0].param("instList"), Some("3,999"));
    assert_eq!(reqs[0].auth_key(), Some("k"));
}

#[tokio::test]
async fn fixture_routes_do_not_shadow_each_other() {
    let t = MockTransport::with_fixtures();
    let single = t
        .get("http://x/v1/instruments/3/stockprices", &[])
        .await
        .expect("response");
    let batch = t
        .get("http://x/v1/instruments/stockprices", &[])
        .await
        .expect("response");
    assert!(single.body.contains("\"instrument\""));
    assert!(batch.body.contains("stockPricesArrayList"));

    let global = t
        .get("http://x/v1/instruments/global", &[])
        .await
        .expect("response");
    assert!(global.body.contains("AAPL"));
}

#[test]
fn every_fixture_is_an_object() {
    for (path, body) in fixtures::routes() {
        assert!(body.is_object(), "{path}");
    }
}

#[tokio::test]
async fn sleeper_records_without_waiting() {
    let s = RecordingSleeper::new();
    s.sleep(Duration::from_secs(3600)).await;
    s.sleep(Duration::from_millis(5)).await;
    assert_eq!(
        s.delays().await,
        vec![Duration::from_secs(3600), Duration::from_millis(5)]
    );
}
