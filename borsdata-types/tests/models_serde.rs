use borsdata_types::models::{
    BatchEntry, Branch, Instrument, InstrumentKpiHistory, InstrumentReports,
    InstrumentStockPrices, KpiAllResponse, KpiCalcUpdated, KpiDatum, KpiSummary, ReportCalendar,
    KpiMetadata, ReportMetadata, ShortPositions, StockPriceLast, StockSplit, TranslationMetadata,
    Translations,
};
use chrono::NaiveDate;
use serde_json::json;

#[test]
fn instrument_keeps_identity_and_wire_aliases() {
    let raw = json!({
        "insId": 3,
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
    });
    let ins: Instrument = serde_json::from_value(raw).expect("instrument");
    assert_eq!(ins.ins_id, 3);
    assert_eq!(ins.market_id, 1);
    assert_eq!(ins.instrument_type, 0);
    assert_eq!(ins.yahoo_symbol.as_deref(), Some("ABB.ST"));
    assert_eq!(
        ins.listing_date.map(|d| d.date()),
        NaiveDate::from_ymd_opt(1999, 6, 22)
    );
}

#[test]
fn absent_descriptive_fields_stay_none() {
    let ins: Instrument = serde_json::from_value(json!({
        "insId": 9, "instrument": 0, "marketId": 2
    }))
    .expect("instrument");
    assert!(ins.name.is_none());
    assert!(ins.listing_date.is_none());
    assert!(ins.sector_id.is_none());
}

#[test]
fn missing_identity_fails() {
    let res: Result<Branch, _> = serde_json::from_value(json!({"name": "Banks", "sectorId": 1}));
    assert!(res.is_err());
}

#[test]
fn kpi_metadata_requires_string_flag() {
    let res: Result<KpiMetadata, _> = serde_json::from_value(json!({"kpiId": 2}));
    assert!(res.is_err());

    let meta: KpiMetadata =
        serde_json::from_value(json!({"kpiId": 161, "isString": true})).expect("metadata");
    assert!(meta.is_string);
    assert!(meta.name_en.is_none());
}

#[test]
fn translation_entry_requires_key() {
    let res: Result<TranslationMetadata, _> = serde_json::from_value(json!({"nameEn": "Banks"}));
    assert!(res.is_err());

    let res: Result<Translations, _> = serde_json::from_value(json!({
        "translationMetadatas": [{"nameSv": "Bank", "nameEn": "Banks"}]
    }));
    assert!(res.is_err());
}

#[test]
fn snake_case_on_the_way_out() {
    let branch: Branch =
        serde_json::from_value(json!({"id": 1, "name": "Banks", "sectorId": 7})).expect("branch");
    let out = serde_json::to_value(&branch).expect("serialize");
    assert_eq!(out["sector_id"], 7);
    assert!(out.get("sectorId").is_none());
}

#[test]
fn last_price_uses_short_keys() {
    let p: StockPriceLast = serde_json::from_value(json!({
        "i": 750, "d": "2024-02-01", "h": 10.5, "l": 9.5, "c": 10.0, "o": 9.8, "v": 12345
    }))
    .expect("last price");
    assert_eq!(p.ins_id, 750);
    assert_eq!(p.close, 10.0);
    assert_eq!(p.volume, Some(12345));
    assert_eq!(p.day(), NaiveDate::from_ymd_opt(2024, 2, 1));
}

#[test]
fn split_date_is_required_and_parsed() {
    let split: StockSplit = serde_json::from_value(json!({
        "insId": 2, "splitDate": "2021-05-20T00:00:00", "splitRatio": 4.0, "splitType": "Split"
    }))
    .expect("split");
    assert_eq!(split.split_date.date(), NaiveDate::from_ymd_opt(2021, 5, 20).unwrap());

    let bad: Result<StockSplit, _> =
        serde_json::from_value(json!({"insId": 2, "splitDate": "soon"}));
    assert!(bad.is_err());
}

#[test]
fn batch_price_entry_with_error_hides_rows() {
    let entry: InstrumentStockPrices = serde_json::from_value(json!({
        "instrument": 42,
        "error": "Instrument not found",
        "stockPricesList": []
    }))
    .expect("entry");
    assert_eq!(entry.instrument_id(), 42);
    assert!(entry.is_error());
    assert!(entry.prices().is_none());

    let ok: InstrumentStockPrices = serde_json::from_value(json!({
        "instrument": 3,
        "error": null,
        "stockPricesList": [{"d": "2024-01-02", "c": 100.0}]
    }))
    .expect("entry");
    assert!(!ok.is_error());
    assert_eq!(ok.prices().map(<[_]>::len), Some(1));
}

#[test]
fn batch_report_entry_gates_every_period() {
    let entry: InstrumentReports = serde_json::from_value(json!({
        "instrument": 7,
        "error": "No reports",
        "reportsYear": [],
        "reportsQuarter": [],
        "reportsR12": []
    }))
    .expect("entry");
    assert!(entry.year().is_none());
    assert!(entry.quarter().is_none());
    assert!(entry.r12().is_none());
}

#[test]
fn report_fields_follow_api_casing() {
    let entry: InstrumentReports = serde_json::from_value(json!({
        "instrument": 3,
        "reportsYear": [{
            "year": 2023,
            "period": 0,
            "revenues": 1000.0,
            "operating_Income": 150.0,
            "cash_Flow_For_The_Year": -5.0,
            "report_End_Date": "2023-12-31T00:00:00",
            "report_Date": ""
        }]
    }))
    .expect("entry");
    let year = entry.year().expect("year reports");
    assert_eq!(year[0].operating_income, Some(150.0));
    assert_eq!(year[0].cash_flow_for_the_year, Some(-5.0));
    assert!(year[0].gross_income.is_none());
    assert!(year[0].report_date.is_none());
    assert!(year[0].report_end_date.is_some());
}

#[test]
fn report_metadata_accepts_api_typo() {
    let m: ReportMetadata = serde_json::from_value(json!({
        "reportPropery": "revenues", "nameSv": "Omsättning", "nameEn": "Revenues", "format": "mnkr"
    }))
    .expect("metadata");
    assert_eq!(m.report_property.as_deref(), Some("revenues"));
}

#[test]
fn kpi_screener_values_resolve_to_datum() {
    let all: KpiAllResponse = serde_json::from_value(json!({
        "kpiId": 1,
        "group": "last",
        "calculation": "latest",
        "values": [
            {"i": 3, "n": 12.5, "s": null},
            {"i": 4, "n": null, "s": "AAA"},
            {"i": 5}
        ]
    }))
    .expect("screener");
    let values = all.values.expect("values");
    assert_eq!(values[0].datum(), Some(KpiDatum::Number(12.5)));
    assert_eq!(values[1].datum(), Some(KpiDatum::Text("AAA".into())));
    assert_eq!(values[2].datum(), None);
}

#[test]
fn kpi_history_batch_entry_gates_values() {
    let entry: InstrumentKpiHistory = serde_json::from_value(json!({
        "instrument": 5,
        "kpiId": 2,
        "error": "failed",
        "values": [{"y": 2023, "p": 5, "v": 1.0}]
    }))
    .expect("entry");
    assert_eq!(entry.error(), Some("failed"));
    assert!(entry.values().is_none());
}

#[test]
fn kpi_summary_reads_capitalised_id() {
    let summary: KpiSummary = serde_json::from_value(json!({
        "instrument": 3,
        "reportType": "year",
        "kpis": [{"KpiId": 2, "values": [{"y": 2022, "p": 5, "v": 3.2}]}]
    }))
    .expect("summary");
    let kpis = summary.kpis.expect("kpis");
    assert_eq!(kpis[0].kpi_id, 2);
    assert_eq!(kpis[0].values.as_ref().map(Vec::len), Some(1));
}

#[test]
fn kpi_updated_timestamp() {
    let up: KpiCalcUpdated =
        serde_json::from_value(json!({"kpisCalcUpdated": "2024-02-01T06:12:44.53"}))
            .expect("updated");
    assert!(up.kpis_calc_updated.is_some());
}

#[test]
fn holdings_envelope_is_generic() {
    let shorts: ShortPositions = serde_json::from_value(json!({
        "insId": 3,
        "values": [{"positionHolder": "Fund", "position": 0.6, "date": "2024-01-10T00:00:00"}],
        "error": null
    }))
    .expect("shorts");
    assert_eq!(shorts.ins_id, 3);
    let rows = shorts.values().expect("rows");
    assert_eq!(rows[0].position_holder.as_deref(), Some("Fund"));
}

#[test]
fn calendar_envelope_with_error() {
    let cal: ReportCalendar = serde_json::from_value(json!({
        "insId": 11,
        "values": [{"releaseDate": "2024-04-25T00:00:00", "reportType": "Q1"}],
        "error": "Missing"
    }))
    .expect("calendar");
    assert!(cal.is_error());
    assert!(cal.values().is_none());
}

#[test]
fn translations_from_wire() {
    let t: Translations = serde_json::from_value(json!({
        "translationMetadatas": [
            {"translationKey": "L_BRANCH_18", "nameSv": "Industri", "nameEn": "Industry"},
            {"translationKey": "L_COUNTRY_1", "nameSv": "Sverige", "nameEn": "Sweden"},
            {"translationKey": "L_SECTOR_", "nameSv": "?", "nameEn": "?"}
        ]
    }))
    .expect("translations");
    assert_eq!(t.entries.len(), 3);
    assert_eq!(t.branches()[0].id, 18);
    assert_eq!(t.countries()[0].name_en.as_deref(), Some("Sweden"));
    assert!(t.sectors().is_empty());

    let empty: Translations = serde_json::from_value(json!({})).expect("empty");
    assert!(empty.entries.is_empty());
}
