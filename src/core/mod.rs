pub mod analyzer;
pub mod etl;
pub mod parser;
pub mod stats;

pub use crate::domain::model::{Record, Report, Ticket};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
