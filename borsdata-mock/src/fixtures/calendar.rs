use serde_json::{Value, json};

use super::{FAILING_INSTRUMENT, INSTRUMENT};

/// `/instruments/report/calendar`: upcoming reports, with a failed entry.
#[must_use]
pub fn reports() -> Value {
    json!({
        "list": [
            {
                "insId": INSTRUMENT,
                "values": [
                    {"releaseDate": "2024-04-18T00:00:00", "reportType": "Q1"},
                    {"releaseDate": "2024-07-18T00:00:00", "reportType": "Q2"}
                ],
                "error": null
            },
            {"insId": FAILING_INSTRUMENT, "values": [], "error": "Instrument not found"}
        ]
    })
}

/// `/instruments/dividend/calendar`: dividend dates of [`INSTRUMENT`].
#[must_use]
pub fn dividends() -> Value {
    json!({
        "list": [
            {
                "insId": INSTRUMENT,
                "values": [{
                    "amountPaid": 0.9,
                    "currencyShortName": "CHF",
                    "distributionFrequency": 1,
                    "excludingDate": "2024-03-27T00:00:00",
                    "dividendType": 0
                }],
                "error": null
            }
        ]
    })
}
