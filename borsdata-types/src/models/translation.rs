//! Translation metadata for branch, sector and country names.

use serde::{Deserialize, Serialize};

/// One raw translation entry, keyed like `L_BRANCH_12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TranslationMetadata {
    /// Translation key.
    pub translation_key: String,
    /// Swedish text.
    pub name_sv: Option<String>,
    /// English text.
    pub name_en: Option<String>,
}

/// Translation resolved to the id it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationItem {
    /// Branch, sector or country id.
    pub id: i64,
    /// Swedish text.
    pub name_sv: Option<String>,
    /// English text.
    pub name_en: Option<String>,
}

/// Full translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    /// Raw entries in API order.
    #[serde(rename(deserialize = "translationMetadatas"), default)]
    pub entries: Vec<TranslationMetadata>,
}

impl Translations {
    fn with_prefix(&self, prefix: &str) -> Vec<TranslationItem> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let id = entry.translation_key.strip_prefix(prefix)?.parse().ok()?;
                Some(TranslationItem {
                    id,
                    name_sv: entry.name_sv.clone(),
                    name_en: entry.name_en.clone(),
                })
            })
            .collect()
    }

    /// Branch names keyed by branch id. Keys without a numeric suffix are skipped.
    #[must_use]
    pub fn branches(&self) -> Vec<TranslationItem> {
        self.with_prefix("L_BRANCH_")
    }

    /// Sector names keyed by sector id.
    #[must_use]
    pub fn sectors(&self) -> Vec<TranslationItem> {
        self.with_prefix("L_SECTOR_")
    }

    /// Country names keyed by country id.
    #[must_use]
    pub fn countries(&self) -> Vec<TranslationItem> {
        self.with_prefix("L_COUNTRY_")
    }
}
