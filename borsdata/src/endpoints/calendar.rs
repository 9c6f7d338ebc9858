use borsdata_core::models::{DividendCalendar, ReportCalendar};

use crate::BorsdataClient;

impl BorsdataClient {
    borsdata_batch_endpoint! {
        /// Report release dates for up to 50 instruments.
        method: report_calendar -> ReportCalendar,
        path: "/instruments/report/calendar",
        envelope: "list"
    }

    borsdata_batch_endpoint! {
        /// Dividend dates for up to 50 instruments.
        method: dividend_calendar -> DividendCalendar,
        path: "/instruments/dividend/calendar",
        envelope: "list"
    }
}
