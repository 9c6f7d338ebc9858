#![allow(dead_code)]

use std::sync::Arc;

use borsdata::BorsdataClient;
use borsdata_mock::{MockTransport, RecordingSleeper};

pub const KEY: &str = "test-key";
pub const BASE: &str = "http://mock.local/v1";

pub fn client_with(transport: &Arc<MockTransport>, sleeper: &Arc<RecordingSleeper>) -> BorsdataClient {
    BorsdataClient::builder(KEY)
        .base_url(BASE)
        .transport(transport.clone())
        .sleeper(sleeper.clone())
        .build()
        .expect("client")
}

pub fn scripted(transport: MockTransport) -> (BorsdataClient, Arc<MockTransport>, Arc<RecordingSleeper>) {
    let transport = Arc::new(transport);
    let sleeper = Arc::new(RecordingSleeper::new());
    (client_with(&transport, &sleeper), transport, sleeper)
}

pub fn fixtures() -> (BorsdataClient, Arc<MockTransport>) {
    let (client, transport, _) = scripted(MockTransport::with_fixtures());
    (client, transport)
}
