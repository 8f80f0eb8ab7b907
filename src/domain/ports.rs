use crate::domain::model::{MedianMode, OutputFormat, ParseErrorPolicy, Record, Report, Route};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn route(&self) -> Route;
    fn median_mode(&self) -> MedianMode;
    fn parse_error_policy(&self) -> ParseErrorPolicy;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<Report>;
    async fn load(&self, report: Report) -> Result<String>;
}
