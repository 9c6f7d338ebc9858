use serde_json::{Value, json};

use super::{FAILING_INSTRUMENT, INSTRUMENT};

/// `/holdings/insider`: insider trades per instrument, with a failed entry.
#[must_use]
pub fn insider() -> Value {
    json!({
        "list": [
            {
                "insId": INSTRUMENT,
                "values": [{
                    "misc": false,
                    "ownerName": "Jane Doe",
                    "ownerPosition": "CFO",
                    "equityProgram": false,
                    "shares": 5000,
                    "price": 245.5,
                    "amount": 1227500.0,
                    "currency": "SEK",
                    "transactionType": 0,
                    "verificationDate": "2024-01-16T00:00:00",
                    "transactionDate": "2024-01-15T00:00:00"
                }],
                "error": null
            },
            {"insId": FAILING_INSTRUMENT, "values": [], "error": "Instrument not found"}
        ]
    })
}

/// `/holdings/shorts`: short positions for every instrument.
#[must_use]
pub fn shorts() -> Value {
    json!({
        "list": [
            {
                "insId": INSTRUMENT,
                "values": [{"positionHolder": "Example Capital LLP", "position": 0.62, "date": "2024-01-10T00:00:00"}],
                "error": null
            }
        ]
    })
}

/// `/holdings/buyback`: buyback rows per instrument, with a failed entry.
#[must_use]
pub fn buyback() -> Value {
    json!({
        "list": [
            {
                "insId": INSTRUMENT,
                "values": [{
                    "change": 120000,
                    "changeProc": 0.01,
                    "price": 243.8,
                    "currency": "SEK",
                    "shares": 3250000,
                    "sharesProc": 0.17,
                    "date": "2024-01-19T00:00:00"
                }],
                "error": null
            },
            {"insId": FAILING_INSTRUMENT, "values": null, "error": "Instrument not found"}
        ]
    })
}
