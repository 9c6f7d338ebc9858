use borsdata_core::models::{
    Branch, Country, Instrument, InstrumentDescription, Market, Sector, Translations,
};
use borsdata_core::{BorsdataError, QueryParams};

use crate::BorsdataClient;

impl BorsdataClient {
    borsdata_list_endpoint! {
        /// All branches (industries).
        method: branches -> Branch,
        path: "/branches",
        envelope: "branches"
    }

    borsdata_list_endpoint! {
        /// All countries.
        method: countries -> Country,
        path: "/countries",
        envelope: "countries"
    }

    borsdata_list_endpoint! {
        /// All markets and index lists.
        method: markets -> Market,
        path: "/markets",
        envelope: "markets"
    }

    borsdata_list_endpoint! {
        /// All sectors.
        method: sectors -> Sector,
        path: "/sectors",
        envelope: "sectors"
    }

    borsdata_list_endpoint! {
        /// Nordic instruments.
        method: instruments -> Instrument,
        path: "/instruments",
        envelope: "instruments"
    }

    borsdata_list_endpoint! {
        /// Global instruments (Pro+ subscription).
        method: global_instruments -> Instrument,
        path: "/instruments/global",
        envelope: "instruments"
    }

    borsdata_batch_endpoint! {
        /// Company descriptions for up to 50 instruments.
        method: instrument_descriptions -> InstrumentDescription,
        path: "/instruments/description",
        envelope: "list"
    }

    /// Swedish and English names for branches, sectors and countries.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not match the expected shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "borsdata::endpoints", skip(self))
    )]
    pub async fn translation_metadata(&self) -> Result<Translations, BorsdataError> {
        self.get("/translationmetadata", QueryParams::new()).await
    }
}
