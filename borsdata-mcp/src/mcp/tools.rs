//! The tool table: one tool per client endpoint method.
//!
//! Each [`ToolSpec`] declares its arguments once; the JSON schema served by
//! `tools/list` and the validation applied by `tools/call` are both derived
//! from that declaration.

use borsdata::{BorsdataClient, PriceType, ReportType};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::ToolError;

const REPORT_TYPES: &[&str] = &["year", "r12", "quarter"];
const PRICE_TYPES: &[&str] = &["mean", "high", "low"];

/// Accepted JSON kind of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// JSON integer.
    Integer,
    /// JSON boolean.
    Boolean,
    /// Free-form string.
    Text,
    /// String in `YYYY-MM-DD` form.
    Date,
    /// Array of integers.
    IntegerList,
    /// String drawn from a fixed set.
    OneOf(&'static [&'static str]),
}

/// One declared argument.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    /// Argument name.
    pub name: &'static str,
    /// Accepted kind.
    pub kind: ArgKind,
    /// Whether the call fails without it.
    pub required: bool,
    /// Text shown to the caller.
    pub description: &'static str,
}

const fn required(name: &'static str, kind: ArgKind, description: &'static str) -> ArgSpec {
    ArgSpec {
        name,
        kind,
        required: true,
        description,
    }
}

const fn optional(name: &'static str, kind: ArgKind, description: &'static str) -> ArgSpec {
    ArgSpec {
        name,
        kind,
        required: false,
        description,
    }
}

impl ArgSpec {
    fn schema(&self) -> Value {
        let mut prop = match self.kind {
            ArgKind::Integer => json!({"type": "integer"}),
            ArgKind::Boolean => json!({"type": "boolean"}),
            ArgKind::Text => json!({"type": "string"}),
            ArgKind::Date => json!({"type": "string", "format": "date"}),
            ArgKind::IntegerList => json!({"type": "array", "items": {"type": "integer"}}),
            ArgKind::OneOf(values) => json!({"type": "string", "enum": values}),
        };
        prop["description"] = Value::from(self.description);
        prop
    }

    fn check(&self, value: &Value) -> Result<(), ToolError> {
        let ok = match self.kind {
            ArgKind::Integer => value.is_i64(),
            ArgKind::Boolean => value.is_boolean(),
            ArgKind::Text => value.is_string(),
            ArgKind::Date => {
                let Some(s) = value.as_str() else {
                    return Err(ToolError::invalid(self.name, "expected a YYYY-MM-DD string"));
                };
                parse_date(self.name, s).map(|_| ())?;
                true
            }
            ArgKind::IntegerList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_i64)),
            ArgKind::OneOf(values) => {
                let Some(s) = value.as_str() else {
                    return Err(ToolError::invalid(self.name, "expected a string"));
                };
                if !values.contains(&s) {
                    return Err(ToolError::invalid(
                        self.name,
                        format!("'{s}' is not one of {}", values.join(", ")),
                    ));
                }
                true
            }
        };
        if ok {
            Ok(())
        } else {
            Err(ToolError::invalid(self.name, format!("expected {}", self.kind_name())))
        }
    }

    const fn kind_name(&self) -> &'static str {
        match self.kind {
            ArgKind::Integer => "an integer",
            ArgKind::Boolean => "a boolean",
            ArgKind::Text | ArgKind::OneOf(_) => "a string",
            ArgKind::Date => "a YYYY-MM-DD string",
            ArgKind::IntegerList => "an array of integers",
        }
    }
}

fn parse_date(name: &str, s: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ToolError::invalid(name, format!("'{s}' is not a YYYY-MM-DD date")))
}

/// A named tool with its declared arguments.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// Tool name, `get_<client method>`.
    pub name: &'static str,
    /// Text shown to the caller.
    pub description: &'static str,
    /// Declared arguments.
    pub args: &'static [ArgSpec],
}

impl ToolSpec {
    /// JSON schema of the tool's arguments.
    #[must_use]
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .args
            .iter()
            .map(|a| (a.name.to_string(), a.schema()))
            .collect();
        let required: Vec<&str> = self
            .args
            .iter()
            .filter(|a| a.required)
            .map(|a| a.name)
            .collect();
        json!({"type": "object", "properties": properties, "required": required})
    }

    /// Entry served by `tools/list`.
    #[must_use]
    pub fn definition(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

const INSTRUMENT_ID: ArgSpec = required(
    "instrument_id",
    ArgKind::Integer,
    "Instrument id (insId from get_instruments)",
);
const INSTRUMENT_IDS: ArgSpec = required(
    "instrument_ids",
    ArgKind::IntegerList,
    "Instrument ids, 1 to 50 per call",
);
const FROM_DATE: ArgSpec = optional("from_date", ArgKind::Date, "First day, YYYY-MM-DD");
const TO_DATE: ArgSpec = optional("to_date", ArgKind::Date, "Last day, YYYY-MM-DD");
const DATE: ArgSpec = required("date", ArgKind::Date, "Trading day, YYYY-MM-DD");
const KPI_ID: ArgSpec = required("kpi_id", ArgKind::Integer, "KPI id (from get_kpi_metadata)");
const REPORT_TYPE: ArgSpec = required(
    "report_type",
    ArgKind::OneOf(REPORT_TYPES),
    "Report period: year, r12 or quarter",
);
const PRICE_TYPE: ArgSpec = optional(
    "price_type",
    ArgKind::OneOf(PRICE_TYPES),
    "Share price the KPI is computed from (default mean)",
);
const MAX_COUNT: ArgSpec = optional("max_count", ArgKind::Integer, "Maximum number of rows");
const ORIGINAL: ArgSpec = optional(
    "original_currency",
    ArgKind::Boolean,
    "Report in the company's own currency instead of the listing currency (default false)",
);
const CALC_GROUP: ArgSpec = required(
    "calc_group",
    ArgKind::Text,
    "Screener period, e.g. last, 1year, 3year",
);
const CALC: ArgSpec = required("calc", ArgKind::Text, "Screener aggregation, e.g. latest, mean, cagr");

/// Every tool served, in `tools/list` order.
pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_branches",
        description: "List all branches (industries) with their sector id.",
        args: &[],
    },
    ToolSpec {
        name: "get_countries",
        description: "List all countries instruments are listed in.",
        args: &[],
    },
    ToolSpec {
        name: "get_markets",
        description: "List all markets and indices with their exchange.",
        args: &[],
    },
    ToolSpec {
        name: "get_sectors",
        description: "List all sectors.",
        args: &[],
    },
    ToolSpec {
        name: "get_instruments",
        description: "List all Nordic instruments with ticker, ISIN, market, sector and branch ids.",
        args: &[],
    },
    ToolSpec {
        name: "get_global_instruments",
        description: "List all global instruments (Pro+ subscription).",
        args: &[],
    },
    ToolSpec {
        name: "get_instrument_descriptions",
        description: "Company descriptions for the given instruments.",
        args: &[INSTRUMENT_IDS],
    },
    ToolSpec {
        name: "get_translation_metadata",
        description: "Swedish and English names for branches, sectors and countries.",
        args: &[],
    },
    ToolSpec {
        name: "get_stock_prices",
        description: "Daily prices for one instrument, newest first (20 rows unless max_count is given).",
        args: &[INSTRUMENT_ID, FROM_DATE, TO_DATE, MAX_COUNT],
    },
    ToolSpec {
        name: "get_stock_prices_batch",
        description: "Daily prices for up to 50 instruments in one call.",
        args: &[INSTRUMENT_IDS, FROM_DATE, TO_DATE],
    },
    ToolSpec {
        name: "get_last_stock_prices",
        description: "Latest price row for every Nordic instrument.",
        args: &[],
    },
    ToolSpec {
        name: "get_last_global_stock_prices",
        description: "Latest price row for every global instrument (Pro+ subscription).",
        args: &[],
    },
    ToolSpec {
        name: "get_stock_prices_by_date",
        description: "Price row for every Nordic instrument on one day.",
        args: &[DATE],
    },
    ToolSpec {
        name: "get_global_stock_prices_by_date",
        description: "Price row for every global instrument on one day (Pro+ subscription).",
        args: &[DATE],
    },
    ToolSpec {
        name: "get_stock_splits",
        description: "Stock splits, optionally only those on or after from_date.",
        args: &[FROM_DATE],
    },
    ToolSpec {
        name: "get_reports",
        description: "Financial reports for one instrument (10 unless max_count is given).",
        args: &[
            INSTRUMENT_ID,
            optional(
                "report_type",
                ArgKind::OneOf(REPORT_TYPES),
                "Report period: year, r12 or quarter (default year)",
            ),
            MAX_COUNT,
            ORIGINAL,
        ],
    },
    ToolSpec {
        name: "get_reports_batch",
        description: "Year, quarter and R12 reports for up to 50 instruments.",
        args: &[
            INSTRUMENT_IDS,
            optional("max_year_count", ArgKind::Integer, "Year reports per instrument, 1 to 20"),
            optional(
                "max_quarter_r12_count",
                ArgKind::Integer,
                "Quarter and R12 reports per instrument, 1 to 40",
            ),
            ORIGINAL,
        ],
    },
    ToolSpec {
        name: "get_reports_metadata",
        description: "Names and formats of every report field.",
        args: &[],
    },
    ToolSpec {
        name: "get_kpi_metadata",
        description: "Every KPI with its id, names and format.",
        args: &[],
    },
    ToolSpec {
        name: "get_kpi_updated",
        description: "When KPI values were last recalculated.",
        args: &[],
    },
    ToolSpec {
        name: "get_kpi_history",
        description: "History of one KPI for one instrument.",
        args: &[INSTRUMENT_ID, KPI_ID, REPORT_TYPE, PRICE_TYPE, MAX_COUNT],
    },
    ToolSpec {
        name: "get_kpi_history_batch",
        description: "History of one KPI for up to 50 instruments.",
        args: &[INSTRUMENT_IDS, KPI_ID, REPORT_TYPE, PRICE_TYPE, MAX_COUNT],
    },
    ToolSpec {
        name: "get_kpi_summary",
        description: "History of every KPI for one instrument.",
        args: &[INSTRUMENT_ID, REPORT_TYPE, MAX_COUNT],
    },
    ToolSpec {
        name: "get_kpi_screener",
        description: "Current screener value of one KPI for every instrument.",
        args: &[KPI_ID, CALC_GROUP, CALC],
    },
    ToolSpec {
        name: "get_kpi_screener_instrument",
        description: "Current screener value of one KPI for one instrument.",
        args: &[INSTRUMENT_ID, KPI_ID, CALC_GROUP, CALC],
    },
    ToolSpec {
        name: "get_insider_holdings",
        description: "Insider transactions for the given instruments.",
        args: &[INSTRUMENT_IDS],
    },
    ToolSpec {
        name: "get_short_positions",
        description: "Reported short positions for every instrument.",
        args: &[],
    },
    ToolSpec {
        name: "get_buybacks",
        description: "Share buybacks for the given instruments.",
        args: &[INSTRUMENT_IDS],
    },
    ToolSpec {
        name: "get_report_calendar",
        description: "Upcoming report release dates for the given instruments.",
        args: &[INSTRUMENT_IDS],
    },
    ToolSpec {
        name: "get_dividend_calendar",
        description: "Upcoming dividends for the given instruments.",
        args: &[INSTRUMENT_IDS],
    },
];

/// Look up a tool by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|t| t.name == name)
}

/// Arguments that passed validation against a [`ToolSpec`].
///
/// `null` values count as absent. Undeclared keys are ignored.
#[derive(Debug)]
pub struct Args<'a> {
    values: Option<&'a Map<String, Value>>,
}

impl<'a> Args<'a> {
    /// Validate `arguments` (an object, or `null` for none) against `spec`.
    ///
    /// # Errors
    /// Returns `MissingArgument` for an absent required argument and
    /// `InvalidArgument` for a value of the wrong kind.
    pub fn validate(spec: &ToolSpec, arguments: &'a Value) -> Result<Self, ToolError> {
        let values = match arguments {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => return Err(ToolError::invalid("arguments", "expected an object")),
        };
        let args = Self { values };
        for arg in spec.args {
            match args.get(arg.name) {
                Some(v) => arg.check(v)?,
                None if arg.required => {
                    return Err(ToolError::MissingArgument(arg.name.to_string()));
                }
                None => {}
            }
        }
        Ok(args)
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.values?.get(name).filter(|v| !v.is_null())
    }

    fn int(&self, name: &str) -> Result<i64, ToolError> {
        self.get(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| ToolError::MissingArgument(name.to_string()))
    }

    fn count(&self, name: &str) -> Result<Option<u32>, ToolError> {
        self.get(name)
            .and_then(Value::as_i64)
            .map(|v| {
                u32::try_from(v)
                    .map_err(|_| ToolError::invalid(name, format!("{v} is not a valid count")))
            })
            .transpose()
    }

    fn ids(&self, name: &str) -> Result<Vec<i64>, ToolError> {
        let items = self
            .get(name)
            .and_then(Value::as_array)
            .ok_or_else(|| ToolError::MissingArgument(name.to_string()))?;
        Ok(items.iter().filter_map(Value::as_i64).collect())
    }

    fn text(&self, name: &str) -> Result<&'a str, ToolError> {
        self.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::MissingArgument(name.to_string()))
    }

    fn date(&self, name: &str) -> Result<Option<NaiveDate>, ToolError> {
        self.get(name)
            .and_then(Value::as_str)
            .map(|s| parse_date(name, s))
            .transpose()
    }

    fn required_date(&self, name: &str) -> Result<NaiveDate, ToolError> {
        self.date(name)?
            .ok_or_else(|| ToolError::MissingArgument(name.to_string()))
    }

    fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    fn report_type(&self, name: &str) -> Result<ReportType, ToolError> {
        match self.get(name).and_then(Value::as_str) {
            Some(s) => Ok(s.parse()?),
            None => Ok(ReportType::default()),
        }
    }

    fn price_type(&self, name: &str) -> Result<PriceType, ToolError> {
        match self.get(name).and_then(Value::as_str) {
            Some(s) => Ok(s.parse()?),
            None => Ok(PriceType::default()),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    Ok(serde_json::to_value(value)?)
}

/// Validate `arguments` and run the tool named `name` against `client`.
///
/// # Errors
/// Returns `UnknownTool` for a name not in [`TOOLS`], a validation error for
/// bad arguments, or the client's error.
#[allow(clippy::too_many_lines)]
pub async fn call(
    client: &BorsdataClient,
    name: &str,
    arguments: &Value,
) -> Result<Value, ToolError> {
    let spec = find(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
    let a = Args::validate(spec, arguments)?;

    match spec.name {
        "get_branches" => to_json(&client.branches().await?),
        "get_countries" => to_json(&client.countries().await?),
        "get_markets" => to_json(&client.markets().await?),
        "get_sectors" => to_json(&client.sectors().await?),
        "get_instruments" => to_json(&client.instruments().await?),
        "get_global_instruments" => to_json(&client.global_instruments().await?),
        "get_instrument_descriptions" => {
            to_json(&client.instrument_descriptions(&a.ids("instrument_ids")?).await?)
        }
        "get_translation_metadata" => to_json(&client.translation_metadata().await?),
        "get_stock_prices" => to_json(
            &client
                .stock_prices(
                    a.int("instrument_id")?,
                    a.date("from_date")?,
                    a.date("to_date")?,
                    a.count("max_count")?,
                )
                .await?,
        ),
        "get_stock_prices_batch" => to_json(
            &client
                .stock_prices_batch(
                    &a.ids("instrument_ids")?,
                    a.date("from_date")?,
                    a.date("to_date")?,
                )
                .await?,
        ),
        "get_last_stock_prices" => to_json(&client.last_stock_prices().await?),
        "get_last_global_stock_prices" => to_json(&client.last_global_stock_prices().await?),
        "get_stock_prices_by_date" => {
            to_json(&client.stock_prices_by_date(a.required_date("date")?).await?)
        }
        "get_global_stock_prices_by_date" => to_json(
            &client
                .global_stock_prices_by_date(a.required_date("date")?)
                .await?,
        ),
        "get_stock_splits" => to_json(&client.stock_splits(a.date("from_date")?).await?),
        "get_reports" => to_json(
            &client
                .reports(
                    a.int("instrument_id")?,
                    a.report_type("report_type")?,
                    a.count("max_count")?,
                    a.flag("original_currency"),
                )
                .await?,
        ),
        "get_reports_batch" => to_json(
            &client
                .reports_batch(
                    &a.ids("instrument_ids")?,
                    a.count("max_year_count")?,
                    a.count("max_quarter_r12_count")?,
                    a.flag("original_currency"),
                )
                .await?,
        ),
        "get_reports_metadata" => to_json(&client.reports_metadata().await?),
        "get_kpi_metadata" => to_json(&client.kpi_metadata().await?),
        "get_kpi_updated" => to_json(&client.kpi_updated().await?),
        "get_kpi_history" => to_json(
            &client
                .kpi_history(
                    a.int("instrument_id")?,
                    a.int("kpi_id")?,
                    a.report_type("report_type")?,
                    a.price_type("price_type")?,
                    a.count("max_count")?,
                )
                .await?,
        ),
        "get_kpi_history_batch" => to_json(
            &client
                .kpi_history_batch(
                    &a.ids("instrument_ids")?,
                    a.int("kpi_id")?,
                    a.report_type("report_type")?,
                    a.price_type("price_type")?,
                    a.count("max_count")?,
                )
                .await?,
        ),
        "get_kpi_summary" => to_json(
            &client
                .kpi_summary(
                    a.int("instrument_id")?,
                    a.report_type("report_type")?,
                    a.count("max_count")?,
                )
                .await?,
        ),
        "get_kpi_screener" => to_json(
            &client
                .kpi_screener(a.int("kpi_id")?, a.text("calc_group")?, a.text("calc")?)
                .await?,
        ),
        "get_kpi_screener_instrument" => to_json(
            &client
                .kpi_screener_instrument(
                    a.int("instrument_id")?,
                    a.int("kpi_id")?,
                    a.text("calc_group")?,
                    a.text("calc")?,
                )
                .await?,
        ),
        "get_insider_holdings" => {
            to_json(&client.insider_holdings(&a.ids("instrument_ids")?).await?)
        }
        "get_short_positions" => to_json(&client.short_positions().await?),
        "get_buybacks" => to_json(&client.buybacks(&a.ids("instrument_ids")?).await?),
        "get_report_calendar" => to_json(&client.report_calendar(&a.ids("instrument_ids")?).await?),
        "get_dividend_calendar" => {
            to_json(&client.dividend_calendar(&a.ids("instrument_ids")?).await?)
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_prefixed() {
        let names: HashSet<_> = TOOLS.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TOOLS.len());
        assert_eq!(TOOLS.len(), 30);
        assert!(TOOLS.iter().all(|t| t.name.starts_with("get_")));
    }

    #[test]
    fn schema_lists_required_arguments() {
        let schema = find("get_kpi_history").unwrap().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(
            schema["required"],
            json!(["instrument_id", "kpi_id", "report_type"])
        );
        assert_eq!(
            schema["properties"]["report_type"]["enum"],
            json!(["year", "r12", "quarter"])
        );
        assert_eq!(schema["properties"]["instrument_id"]["type"], "integer");
    }

    #[test]
    fn parameterless_schema_is_empty_object() {
        let schema = find("get_branches").unwrap().input_schema();
        assert_eq!(schema["properties"], json!({}));
        assert_eq!(schema["required"], json!([]));
    }

    #[test]
    fn validation_rules() {
        let spec = find("get_stock_prices").unwrap();

        let missing = json!({"max_count": 5});
        assert!(matches!(
            Args::validate(spec, &missing),
            Err(ToolError::MissingArgument(n)) if n == "instrument_id"
        ));

        let wrong_kind = json!({"instrument_id": "3"});
        assert!(matches!(
            Args::validate(spec, &wrong_kind),
            Err(ToolError::InvalidArgument { name, .. }) if name == "instrument_id"
        ));

        let bad_date = json!({"instrument_id": 3, "from_date": "2024/01/01"});
        assert!(matches!(
            Args::validate(spec, &bad_date),
            Err(ToolError::InvalidArgument { name, .. }) if name == "from_date"
        ));

        let null_optional = json!({"instrument_id": 3, "from_date": null, "extra": true});
        assert!(Args::validate(spec, &null_optional).is_ok());
    }

    #[test]
    fn enum_and_list_validation() {
        let spec = find("get_kpi_history_batch").unwrap();
        let bad_enum = json!({"instrument_ids": [3], "kpi_id": 2, "report_type": "monthly"});
        assert!(Args::validate(spec, &bad_enum).is_err());

        let bad_list = json!({"instrument_ids": [3, "x"], "kpi_id": 2, "report_type": "year"});
        assert!(matches!(
            Args::validate(spec, &bad_list),
            Err(ToolError::InvalidArgument { name, .. }) if name == "instrument_ids"
        ));

        assert!(Args::validate(spec, &json!([1, 2])).is_err());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let spec = find("get_reports").unwrap();
        let raw = json!({"instrument_id": 3, "max_count": -1});
        let args = Args::validate(spec, &raw).unwrap();
        assert!(args.count("max_count").is_err());
        assert_eq!(args.report_type("report_type").unwrap(), ReportType::Year);
        assert!(!args.flag("original_currency"));
    }
}
