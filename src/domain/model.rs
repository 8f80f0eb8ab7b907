use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 未經型別轉換的原始票務記錄 (JSON 物件欄位 → 值)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub origin: String,
    pub destination: String,
    pub carrier: String,
    pub price: u64,
    pub flight_duration_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        ticket.origin == self.origin && ticket.destination == self.destination
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new("VVO", "TLV")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.origin, self.destination)
    }
}

/// How the two central prices of an even-sized sample are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianMode {
    /// Floating point mean of the two central values.
    #[default]
    Interpolated,
    /// Integer average, fractional part discarded (150, 151 -> 150).
    LegacyTruncated,
}

impl FromStr for MedianMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "interpolated" => Ok(MedianMode::Interpolated),
            "legacy" | "legacy-truncated" | "legacy_truncated" => Ok(MedianMode::LegacyTruncated),
            other => Err(format!(
                "unknown median mode '{}', expected interpolated or legacy-truncated",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorPolicy {
    #[default]
    Abort,
    Skip,
}

impl FromStr for ParseErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "abort" => Ok(ParseErrorPolicy::Abort),
            "skip" => Ok(ParseErrorPolicy::Skip),
            other => Err(format!(
                "unknown parse error policy '{}', expected abort or skip",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{}', expected text, json or csv",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierSummary {
    pub carrier: String,
    pub min_flight_minutes: u64,
    pub ticket_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub route: Route,
    pub carriers: Vec<CarrierSummary>,
    /// `None` 代表沒有符合航線的票價資料
    pub prices: Option<PriceStats>,
    pub total_records: usize,
    pub matched_tickets: usize,
    pub skipped_records: usize,
}
