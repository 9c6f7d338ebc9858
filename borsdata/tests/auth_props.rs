use std::sync::Arc;

use borsdata::BorsdataClient;
use borsdata_mock::{MockReply, MockTransport, RecordingSleeper};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_request_carries_the_configured_key(
        key in "[A-Za-z0-9]{1,40}",
        ids in proptest::collection::vec(1_i64..100_000, 1..=50),
    ) {
        let transport = Arc::new(
            MockTransport::new().then(MockReply::ok(&json!({"list": []}))),
        );
        let client = BorsdataClient::builder(key.clone())
            .base_url("http://mock.local/v1")
            .transport(transport.clone())
            .sleeper(Arc::new(RecordingSleeper::new()))
            .build()
            .expect("client");

        let res = tokio_test::block_on(client.instrument_descriptions(&ids));
        prop_assert!(res.is_ok());

        let reqs = tokio_test::block_on(transport.requests());
        prop_assert_eq!(reqs.len(), 1);
        prop_assert_eq!(reqs[0].params("authKey"), vec![key.as_str()]);
        let expected = ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        prop_assert_eq!(reqs[0].param("instList"), Some(expected.as_str()));
    }

    #[test]
    fn oversized_batches_never_reach_the_transport(extra in 1_usize..20) {
        let transport = Arc::new(MockTransport::new());
        let client = BorsdataClient::builder("k")
            .base_url("http://mock.local/v1")
            .transport(transport.clone())
            .build()
            .expect("client");
        let ids: Vec<i64> = (0..(50 + extra) as i64).collect();

        let res = tokio_test::block_on(client.buybacks(&ids));
        prop_assert!(res.is_err());
        prop_assert_eq!(tokio_test::block_on(transport.calls()), 0);
    }
}
