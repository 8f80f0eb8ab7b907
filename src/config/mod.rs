pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{MedianMode, OutputFormat, ParseErrorPolicy, Route};
use crate::utils::error::Result;
use crate::utils::validation::{validate_airport_code, validate_distinct, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ticket-stats")]
#[command(about = "Per-carrier flight time and price statistics for one route")]
pub struct CliConfig {
    #[arg(long, default_value = "data/tickets.json")]
    pub input: String,

    #[arg(long, default_value = "VVO")]
    pub origin: String,

    #[arg(long, default_value = "TLV")]
    pub destination: String,

    #[arg(long, default_value = "text", help = "text, json or csv")]
    pub format: OutputFormat,

    #[arg(long, help = "Also write the report to this file")]
    pub output: Option<String>,

    #[arg(long, default_value = "interpolated", help = "interpolated or legacy-truncated")]
    pub median_mode: MedianMode,

    #[arg(long, default_value = "abort", help = "abort or skip")]
    pub on_parse_error: ParseErrorPolicy,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn route(&self) -> Route {
        Route::new(&self.origin, &self.destination)
    }

    fn median_mode(&self) -> MedianMode {
        self.median_mode
    }

    fn parse_error_policy(&self) -> ParseErrorPolicy {
        self.on_parse_error
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--input", &self.input)?;
        validate_airport_code("--origin", &self.origin)?;
        validate_airport_code("--destination", &self.destination)?;
        validate_distinct("route", &self.origin, &self.destination)?;
        if let Some(output) = &self.output {
            validate_path("--output", output)?;
        }
        Ok(())
    }
}
