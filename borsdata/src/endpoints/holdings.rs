use borsdata_core::models::{Buyback, InsiderHoldings, ShortPositions};

use crate::BorsdataClient;

impl BorsdataClient {
    borsdata_batch_endpoint! {
        /// Insider transactions for up to 50 instruments.
        method: insider_holdings -> InsiderHoldings,
        path: "/holdings/insider",
        envelope: "list"
    }

    borsdata_list_endpoint! {
        /// Disclosed short positions for every instrument.
        method: short_positions -> ShortPositions,
        path: "/holdings/shorts",
        envelope: "list"
    }

    borsdata_batch_endpoint! {
        /// Share buybacks for up to 50 instruments.
        method: buybacks -> Buyback,
        path: "/holdings/buyback",
        envelope: "list"
    }
}
