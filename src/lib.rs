pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::pipelines::TicketPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::analyzer::{AnalysisOptions, TicketAnalyzer};
pub use core::etl::EtlEngine;
pub use domain::model::{MedianMode, OutputFormat, ParseErrorPolicy, Report, Route, Ticket};
pub use utils::error::{Result, TicketError};
