mod helpers;

use std::sync::Arc;
use std::time::Duration;

use borsdata::{BackoffConfig, BorsdataClient, BorsdataError, QueryParams, models::Branch};
use borsdata_mock::{MockReply, MockTransport, RecordingSleeper};
use helpers::{BASE, KEY, client_with, scripted};
use serde_json::json;

fn ok_branches() -> MockReply {
    MockReply::ok(&json!({"branches": [{"id": 1, "name": "Bank", "sectorId": 1}]}))
}

#[tokio::test]
async fn retries_rate_limit_then_succeeds() {
    let (client, transport, sleeper) = scripted(
        MockTransport::new()
            .then_n(3, &MockReply::rate_limited())
            .then(ok_branches()),
    );

    let branches = client.branches().await.expect("branches");
    assert_eq!(branches.len(), 1);
    assert_eq!(transport.calls().await, 4);

    let delays = sleeper.delays().await;
    assert_eq!(delays.len(), 3);
    assert!(delays.windows(2).all(|w| w[0] < w[1]), "{delays:?}");
}

#[tokio::test]
async fn delays_keep_growing_up_to_the_backoff_cap() {
    let transport = Arc::new(
        MockTransport::new()
            .then_n(6, &MockReply::rate_limited())
            .then(ok_branches()),
    );
    let sleeper = Arc::new(RecordingSleeper::new());
    let client = BorsdataClient::builder(KEY)
        .base_url(BASE)
        .max_attempts(7)
        .transport(transport.clone())
        .sleeper(sleeper.clone())
        .build()
        .expect("client");

    client.branches().await.expect("branches");
    assert_eq!(transport.calls().await, 7);
    let delays = sleeper.delays().await;
    assert_eq!(delays.len(), 6);
    assert!(delays.windows(2).all(|w| w[0] < w[1]), "{delays:?}");
    assert!(delays[5] >= Duration::from_millis(20_000));
}

#[tokio::test]
async fn schedules_that_would_flatten_are_rejected() {
    let err = BorsdataClient::builder(KEY)
        .base_url(BASE)
        .max_attempts(8)
        .build()
        .expect_err("cap reached twice");
    assert!(matches!(err, BorsdataError::InvalidArgument(ref m) if m.contains("max_backoff_ms")));

    let transport = Arc::new(
        MockTransport::new()
            .then_n(7, &MockReply::rate_limited())
            .then(ok_branches()),
    );
    let sleeper = Arc::new(RecordingSleeper::new());
    let client = BorsdataClient::builder(KEY)
        .base_url(BASE)
        .max_attempts(8)
        .backoff(BackoffConfig {
            max_backoff_ms: 100_000,
            jitter_percent: 0,
            ..BackoffConfig::default()
        })
        .transport(transport.clone())
        .sleeper(sleeper.clone())
        .build()
        .expect("client");

    client.branches().await.expect("branches");
    let millis: Vec<u128> = sleeper.delays().await.iter().map(Duration::as_millis).collect();
    assert_eq!(millis, vec![1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000]);
}

#[tokio::test]
async fn exhausting_attempts_is_rate_limit_exceeded() {
    let (client, transport, sleeper) =
        scripted(MockTransport::new().then_n(10, &MockReply::rate_limited()));

    let err = client.branches().await.expect_err("should fail");
    assert_eq!(err, BorsdataError::RateLimitExceeded { attempts: 5 });
    assert_eq!(err.status(), Some(429));
    assert_eq!(transport.calls().await, 5);
    assert_eq!(sleeper.delays().await.len(), 4);
}

#[tokio::test]
async fn max_attempts_is_configurable() {
    let transport = Arc::new(MockTransport::new().then_n(10, &MockReply::rate_limited()));
    let sleeper = Arc::new(RecordingSleeper::new());
    let client = BorsdataClient::builder(KEY)
        .base_url(BASE)
        .max_attempts(2)
        .transport(transport.clone())
        .sleeper(sleeper.clone())
        .build()
        .expect("client");

    let err = client.markets().await.expect_err("should fail");
    assert_eq!(err, BorsdataError::RateLimitExceeded { attempts: 2 });
    assert_eq!(transport.calls().await, 2);

    let transport = Arc::new(MockTransport::new().then_n(10, &MockReply::rate_limited()));
    let client = BorsdataClient::builder(KEY)
        .base_url(BASE)
        .no_retry()
        .transport(transport.clone())
        .sleeper(sleeper.clone())
        .build()
        .expect("client");
    let err = client.markets().await.expect_err("should fail");
    assert_eq!(err, BorsdataError::RateLimitExceeded { attempts: 1 });
    assert_eq!(transport.calls().await, 1);
}

#[tokio::test]
async fn other_status_fails_once() {
    let (client, transport, sleeper) = scripted(
        MockTransport::new()
            .then(MockReply::status(404, "Not Found"))
            .then(ok_branches()),
    );

    let err = client.branches().await.expect_err("should fail");
    assert_eq!(
        err,
        BorsdataError::ApiRequestFailed {
            status: 404,
            body: "Not Found".into()
        }
    );
    assert_eq!(transport.calls().await, 1);
    assert!(sleeper.delays().await.is_empty());
}

#[tokio::test]
async fn server_error_after_rate_limit_is_not_retried_further() {
    let (client, transport, _) = scripted(
        MockTransport::new()
            .then(MockReply::rate_limited())
            .then(MockReply::status(500, "boom"))
            .then(ok_branches()),
    );
    let err = client.branches().await.expect_err("should fail");
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("boom"));
    assert_eq!(transport.calls().await, 2);
}

#[tokio::test]
async fn oversized_batch_never_reaches_the_transport() {
    let (client, transport, _) = scripted(MockTransport::with_fixtures());
    let ids: Vec<i64> = (1..=51).collect();

    let err = client
        .stock_prices_batch(&ids, None, None)
        .await
        .expect_err("should fail");
    assert!(matches!(err, BorsdataError::InvalidArgument(_)));
    let err = client.insider_holdings(&[]).await.expect_err("should fail");
    assert!(matches!(err, BorsdataError::InvalidArgument(_)));
    let err = client
        .reports_batch(&[3], Some(21), None, false)
        .await
        .expect_err("should fail");
    assert!(matches!(err, BorsdataError::InvalidArgument(_)));
    let err = client
        .reports_batch(&[3], None, Some(41), false)
        .await
        .expect_err("should fail");
    assert!(matches!(err, BorsdataError::InvalidArgument(_)));

    assert_eq!(transport.calls().await, 0);
}

#[tokio::test]
async fn fifty_ids_are_accepted() {
    let (client, transport, _) = scripted(MockTransport::with_fixtures());
    let ids: Vec<i64> = (1..=50).collect();
    client
        .stock_prices_batch(&ids, None, None)
        .await
        .expect("batch");
    let req = &transport.requests().await[0];
    assert_eq!(req.param("instList").map(|v| v.split(',').count()), Some(50));
}

#[tokio::test]
async fn caller_supplied_auth_key_is_replaced() {
    let (client, transport, _) = scripted(MockTransport::with_fixtures());
    let params = QueryParams::new()
        .with("authKey", "someone-else")
        .with("maxCount", 5_i64);
    client
        .execute("/instruments/3/stockprices", params)
        .await
        .expect("json");

    let req = &transport.requests().await[0];
    assert_eq!(req.params("authKey"), vec![KEY]);
    assert_eq!(req.param("maxCount"), Some("5"));
    assert_eq!(req.url, format!("{BASE}/instruments/3/stockprices"));
}

#[tokio::test]
async fn invalid_json_is_malformed() {
    let (client, _, _) = scripted(MockTransport::new().then(MockReply::status(200, "<html>")));
    let err = client
        .execute("/branches", QueryParams::new())
        .await
        .expect_err("should fail");
    assert!(matches!(err, BorsdataError::MalformedResponse(_)));
}

#[tokio::test]
async fn shape_mismatch_is_malformed() {
    let (client, _, _) = scripted(
        MockTransport::new()
            .then(MockReply::ok(&json!({"branches": [{"name": "no id"}]})))
            .then(MockReply::ok(&json!({"kpiId": "two"}))),
    );
    let err = client.branches().await.expect_err("should fail");
    assert!(matches!(err, BorsdataError::MalformedResponse(_)));

    let err = client
        .get::<borsdata::models::KpiAllResponse>("/instruments/kpis/2/last/latest", QueryParams::new())
        .await
        .expect_err("should fail");
    assert!(matches!(err, BorsdataError::MalformedResponse(_)));
}

#[tokio::test]
async fn absent_required_fields_are_malformed() {
    let (client, _, _) = scripted(
        MockTransport::new()
            .then(MockReply::ok(&json!({"kpiHistoryMetadatas": [{"kpiId": 2, "nameEn": "P/E"}]})))
            .then(MockReply::ok(&json!({"translationMetadatas": [{"nameEn": "Banks"}]}))),
    );
    let err = client.kpi_metadata().await.expect_err("should fail");
    assert!(matches!(err, BorsdataError::MalformedResponse(_)), "{err:?}");

    let err = client.translation_metadata().await.expect_err("should fail");
    assert!(matches!(err, BorsdataError::MalformedResponse(_)), "{err:?}");
}

#[tokio::test]
async fn missing_envelope_list_is_empty() {
    let (client, _, _) = scripted(
        MockTransport::new()
            .then(MockReply::ok(&json!({"branches": null})))
            .then(MockReply::ok(&json!({}))),
    );
    assert!(client.branches().await.expect("branches").is_empty());
    assert!(client.branches().await.expect("branches").is_empty());
}

#[tokio::test]
async fn transport_failure_is_not_retried_by_default() {
    let (client, transport, sleeper) = scripted(
        MockTransport::new()
            .then(MockReply::transport_error("connection reset"))
            .then(ok_branches()),
    );
    let err = client.branches().await.expect_err("should fail");
    assert!(matches!(err, BorsdataError::Transport(_)));
    assert_eq!(transport.calls().await, 1);
    assert!(sleeper.delays().await.is_empty());
}

#[tokio::test]
async fn transport_failure_retries_when_enabled() {
    let transport = Arc::new(
        MockTransport::new()
            .then(MockReply::transport_error("connection reset"))
            .then(MockReply::rate_limited())
            .then(ok_branches()),
    );
    let sleeper = Arc::new(RecordingSleeper::new());
    let client = BorsdataClient::builder(KEY)
        .base_url(BASE)
        .retry_transport_errors(true)
        .transport(transport.clone())
        .sleeper(sleeper.clone())
        .build()
        .expect("client");

    let branches: Vec<Branch> = client.branches().await.expect("branches");
    assert_eq!(branches[0].id, 1);
    assert_eq!(transport.calls().await, 3);
    assert_eq!(sleeper.delays().await.len(), 2);
}

#[tokio::test]
async fn transport_retries_share_the_attempt_budget() {
    let transport = Arc::new(
        MockTransport::new().then_n(10, &MockReply::transport_error("dns failure")),
    );
    let sleeper = Arc::new(RecordingSleeper::new());
    let client = BorsdataClient::builder(KEY)
        .base_url(BASE)
        .max_attempts(3)
        .retry_transport_errors(true)
        .transport(transport.clone())
        .sleeper(sleeper.clone())
        .build()
        .expect("client");

    let err = client.branches().await.expect_err("should fail");
    assert!(matches!(err, BorsdataError::Transport(ref m) if m.contains("dns failure")));
    assert_eq!(transport.calls().await, 3);
}

#[tokio::test]
async fn clients_share_nothing_but_the_transport() {
    let transport = Arc::new(MockTransport::with_fixtures());
    let sleeper = Arc::new(RecordingSleeper::new());
    let client = Arc::new(client_with(&transport, &sleeper));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&client);
            tokio::spawn(async move { c.sectors().await })
        })
        .collect();
    for h in handles {
        assert_eq!(h.await.expect("join").expect("sectors").len(), 2);
    }
    assert_eq!(transport.calls().await, 4);
}
