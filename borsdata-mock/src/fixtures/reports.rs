use serde_json::{Value, json};

use super::{FAILING_INSTRUMENT, INSTRUMENT};

fn report(year: i32, period: i32) -> Value {
    json!({
        "year": year,
        "period": period,
        "revenues": 32235.0,
        "gross_Income": 11402.0,
        "operating_Income": 5182.0,
        "profit_Before_Tax": 4974.0,
        "profit_To_Equity_Holders": 3745.0,
        "earnings_Per_Share": 2.02,
        "number_Of_Shares": 1853.5,
        "dividend": 0.9,
        "intangible_Assets": 12930.0,
        "tangible_Assets": 4519.0,
        "financial_Assets": 1380.0,
        "non_Current_Assets": 21113.0,
        "cash_And_Equivalents": 4212.0,
        "current_Assets": 20913.0,
        "total_Assets": 42026.0,
        "total_Equity": 14024.0,
        "non_Current_Liabilities": 8721.0,
        "current_Liabilities": 19281.0,
        "total_Liabilities_And_Equity": 42026.0,
        "net_Debt": 3521.0,
        "cash_Flow_From_Operating_Activities": 6456.0,
        "cash_Flow_From_Investing_Activities": -1432.0,
        "cash_Flow_From_Financing_Activities": -3997.0,
        "cash_Flow_For_The_Year": 1027.0,
        "free_Cash_Flow": 5024.0,
        "stock_Price_Average": 28.4,
        "stock_Price_High": 34.1,
        "stock_Price_Low": 23.9,
        "report_Start_Date": format!("{year}-01-01T00:00:00"),
        "report_End_Date": format!("{year}-12-31T00:00:00"),
        "broken_Fiscal_Year": false,
        "currency": "USD",
        "currency_Ratio": 1.0,
        "net_Sales": 32235.0,
        "report_Date": format!("{}-01-31T00:00:00", year + 1)
    })
}

/// Reports of [`INSTRUMENT`]; served for every report type.
#[must_use]
pub fn reports() -> Value {
    json!({
        "instrument": INSTRUMENT,
        "reports": [report(2023, 5), report(2022, 5)]
    })
}

/// Year, R12 and quarter reports for several instruments, with a failed entry.
#[must_use]
pub fn reports_batch() -> Value {
    json!({
        "reportList": [
            {
                "instrument": INSTRUMENT,
                "error": null,
                "reportsYear": [report(2023, 5)],
                "reportsQuarter": [report(2023, 4)],
                "reportsR12": [report(2023, 4)]
            },
            {
                "instrument": FAILING_INSTRUMENT,
                "error": "Instrument not found",
                "reportsYear": [],
                "reportsQuarter": [],
                "reportsR12": []
            }
        ]
    })
}

/// `/instruments/reports/metadata`: report field descriptions.
#[must_use]
pub fn metadata() -> Value {
    json!({
        "reportMetadatas": [
            {"reportPropery": "revenues", "nameSv": "Omsättning", "nameEn": "Revenues", "format": "mnkr"},
            {"reportPropery": "earnings_Per_Share", "nameSv": "Vinst/Aktie", "nameEn": "Earnings/Share", "format": "kr"}
        ]
    })
}
