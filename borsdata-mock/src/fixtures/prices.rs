use serde_json::{Value, json};

use super::{FAILING_INSTRUMENT, INSTRUMENT};

/// Daily prices of [`INSTRUMENT`].
#[must_use]
pub fn stock_prices() -> Value {
    json!({
        "instrument": INSTRUMENT,
        "stockPricesList": [
            {"d": "2024-02-01", "h": 245.1, "l": 240.3, "c": 244.0, "o": 241.0, "v": 2150342},
            {"d": "2024-02-02", "h": 247.8, "l": 243.2, "c": 247.5, "o": 244.1, "v": 1987311}
        ]
    })
}

/// Daily prices for several instruments, with a failed entry.
#[must_use]
pub fn stock_prices_batch() -> Value {
    json!({
        "stockPricesArrayList": [
            {
                "instrument": INSTRUMENT,
                "error": null,
                "stockPricesList": [
                    {"d": "2024-02-02", "h": 247.8, "l": 243.2, "c": 247.5, "o": 244.1, "v": 1987311}
                ]
            },
            {
                "instrument": FAILING_INSTRUMENT,
                "error": "Instrument not found",
                "stockPricesList": []
            }
        ]
    })
}

/// Latest price per instrument; also served for the by-date and global routes.
#[must_use]
pub fn last() -> Value {
    json!({
        "stockPricesList": [
            {"i": INSTRUMENT, "d": "2024-02-02", "h": 247.8, "l": 243.2, "c": 247.5, "o": 244.1, "v": 1987311},
            {"i": 750, "d": "2024-02-02", "h": 131.0, "l": 128.4, "c": 130.2, "o": 129.0, "v": null}
        ]
    })
}

/// `/instruments/stocksplits`: recent splits.
#[must_use]
pub fn splits() -> Value {
    json!({
        "stockSplits": [
            {"insId": 750, "splitDate": "2021-05-20T00:00:00", "splitRatio": 4.0, "splitType": "Split"}
        ]
    })
}
