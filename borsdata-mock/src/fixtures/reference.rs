use serde_json::{Value, json};

use super::{FAILING_INSTRUMENT, INSTRUMENT};

/// `/branches`.
#[must_use]
pub fn branches() -> Value {
    json!({
        "branches": [
            {"id": 1, "name": "Bank", "sectorId": 1},
            {"id": 18, "name": "Industrimaskiner", "sectorId": 4}
        ]
    })
}

/// `/countries`.
#[must_use]
pub fn countries() -> Value {
    json!({
        "countries": [
            {"id": 1, "name": "Sverige"},
            {"id": 2, "name": "Norge"}
        ]
    })
}

/// `/markets`.
#[must_use]
pub fn markets() -> Value {
    json!({
        "markets": [
            {"id": 1, "name": "Large Cap", "countryId": 1, "isIndex": false, "exchangeName": "Nasdaq Stockholm"},
            {"id": 7, "name": "OMXS30", "countryId": 1, "isIndex": true, "exchangeName": null}
        ]
    })
}

/// `/sectors`.
#[must_use]
pub fn sectors() -> Value {
    json!({
        "sectors": [
            {"id": 1, "name": "Finans & Fastighet"},
            {"id": 4, "name": "Industri"}
        ]
    })
}

/// `/instruments`: Nordic listings.
#[must_use]
pub fn instruments() -> Value {
    json!({
        "instruments": [
            {
                "insId": INSTRUMENT,
                "name": "ABB",
                "urlName": "abb",
                "instrument": 0,
                "isin": "CH0012221716",
                "ticker": "ABB",
                "yahoo": "ABB.ST",
                "sectorId": 4,
                "marketId": 1,
                "branchId": 18,
                "countryId": 1,
                "listingDate": "1999-06-22T00:00:00",
                "stockPriceCurrency": "SEK",
                "reportCurrency": "USD"
            },
            {
                "insId": 750,
                "name": "Securitas B",
                "urlName": "securitas",
                "instrument": 0,
                "isin": "SE0000163594",
                "ticker": "SECU B",
                "yahoo": "SECU-B.ST",
                "sectorId": 4,
                "marketId": 1,
                "branchId": 21,
                "countryId": 1,
                "listingDate": null,
                "stockPriceCurrency": "SEK",
                "reportCurrency": "SEK"
            }
        ]
    })
}

/// `/instruments/global`: instruments outside the Nordics.
#[must_use]
pub fn global_instruments() -> Value {
    json!({
        "instruments": [
            {
                "insId": 100001,
                "name": "Apple",
                "urlName": "apple",
                "instrument": 0,
                "isin": "US0378331005",
                "ticker": "AAPL",
                "yahoo": "AAPL",
                "marketId": 30,
                "countryId": 5,
                "stockPriceCurrency": "USD",
                "reportCurrency": "USD"
            }
        ]
    })
}

/// `/instruments/description`: descriptions, with a failed entry.
#[must_use]
pub fn descriptions() -> Value {
    json!({
        "list": [
            {"insId": INSTRUMENT, "languageCode": "en", "text": "ABB is a technology leader in electrification and automation.", "error": null},
            {"insId": FAILING_INSTRUMENT, "languageCode": "en", "text": null, "error": "Instrument not found"}
        ]
    })
}

/// `/translationmetadata`, including one key without a numeric id.
#[must_use]
pub fn translations() -> Value {
    json!({
        "translationMetadatas": [
            {"translationKey": "L_BRANCH_1", "nameSv": "Bank", "nameEn": "Banks"},
            {"translationKey": "L_BRANCH_18", "nameSv": "Industrimaskiner", "nameEn": "Industrial Machinery"},
            {"translationKey": "L_SECTOR_4", "nameSv": "Industri", "nameEn": "Industrials"},
            {"translationKey": "L_COUNTRY_1", "nameSv": "Sverige", "nameEn": "Sweden"},
            {"translationKey": "L_BRANCH_", "nameSv": "?", "nameEn": "?"}
        ]
    })
}
