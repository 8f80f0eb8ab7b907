use crate::app::render::render;
use crate::core::analyzer::{AnalysisOptions, TicketAnalyzer};
use crate::core::parser::{parse_tickets, records_from_document};
use crate::core::{ConfigProvider, Pipeline, Record, Report, Storage};
use crate::utils::error::{Result, TicketError};

pub struct TicketPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    analyzer: TicketAnalyzer,
}

impl<S: Storage, C: ConfigProvider> TicketPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let analyzer = TicketAnalyzer::new(AnalysisOptions {
            route: config.route(),
            median_mode: config.median_mode(),
        });
        Self {
            storage,
            config,
            analyzer,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TicketPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        tracing::debug!("Reading ticket data from: {}", path);

        let bytes = match self.storage.read_file(path).await {
            Ok(bytes) => bytes,
            Err(TicketError::IoError(source)) => {
                return Err(TicketError::InputAccessError {
                    path: path.to_string(),
                    source,
                })
            }
            Err(e) => return Err(e),
        };

        let document: serde_json::Value = serde_json::from_slice(&bytes)?;
        records_from_document(document)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<Report> {
        let parsed = parse_tickets(&data, self.config.parse_error_policy())?;

        let mut report = self.analyzer.analyze(&parsed.tickets);
        report.total_records = data.len();
        report.skipped_records = parsed.skipped;

        if report.prices.is_none() {
            tracing::warn!("No tickets matched route {}", self.analyzer.route());
        }
        Ok(report)
    }

    async fn load(&self, report: Report) -> Result<String> {
        let rendered = render(&report, self.config.output_format())?;

        if let Some(path) = self.config.output_path() {
            tracing::debug!("Writing report ({} bytes) to {}", rendered.len(), path);
            self.storage.write_file(path, rendered.as_bytes()).await?;
            tracing::info!("📁 Report saved to: {}", path);
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MedianMode, OutputFormat, ParseErrorPolicy, Route};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                TicketError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        input: String,
        policy: ParseErrorPolicy,
        format: OutputFormat,
        output: Option<String>,
    }

    impl TestConfig {
        fn new(input: &str) -> Self {
            Self {
                input: input.to_string(),
                policy: ParseErrorPolicy::Abort,
                format: OutputFormat::Text,
                output: None,
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn route(&self) -> Route {
            Route::default()
        }

        fn median_mode(&self) -> MedianMode {
            MedianMode::Interpolated
        }

        fn parse_error_policy(&self) -> ParseErrorPolicy {
            self.policy
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    const TICKETS: &str = r#"{
  "tickets": [
    {"origin": "VVO", "destination": "TLV", "departure_date": "12.05.18", "departure_time": "16:20",
     "arrival_date": "12.05.18", "arrival_time": "22:10", "carrier": "TK", "stops": 3, "price": 12400},
    {"origin": "VVO", "destination": "TLV", "departure_date": "12.05.18", "departure_time": "17:20",
     "arrival_date": "12.05.18", "arrival_time": "23:50", "carrier": "S7", "stops": 1, "price": 13100},
    {"origin": "LRN", "destination": "TLV", "departure_date": "12.05.18", "departure_time": "12:10",
     "arrival_date": "12.05.18", "arrival_time": "14:45", "carrier": "SU", "stops": 0, "price": 7000}
  ]
}"#;

    #[tokio::test]
    async fn test_extract_reads_all_records() {
        let storage = MockStorage::with_file("tickets.json", TICKETS);
        let pipeline = TicketPipeline::new(storage, TestConfig::new("tickets.json"));

        let records = pipeline.extract().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].data.get("carrier").unwrap().as_str().unwrap(), "TK");
    }

    #[tokio::test]
    async fn test_extract_missing_file_is_input_access_error() {
        let storage = MockStorage::with_file("tickets.json", TICKETS);
        let pipeline = TicketPipeline::new(storage, TestConfig::new("other.json"));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, TicketError::InputAccessError { ref path, .. } if path == "other.json"));
    }

    #[tokio::test]
    async fn test_extract_rejects_invalid_json() {
        let storage = MockStorage::with_file("tickets.json", "{ not json");
        let pipeline = TicketPipeline::new(storage, TestConfig::new("tickets.json"));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, TicketError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_transform_filters_route() {
        let storage = MockStorage::with_file("tickets.json", TICKETS);
        let pipeline = TicketPipeline::new(storage, TestConfig::new("tickets.json"));

        let records = pipeline.extract().await.unwrap();
        let report = pipeline.transform(records).await.unwrap();

        assert_eq!(report.total_records, 3);
        assert_eq!(report.matched_tickets, 2);
        let carriers: Vec<&str> = report.carriers.iter().map(|c| c.carrier.as_str()).collect();
        assert_eq!(carriers, vec!["S7", "TK"]);
        assert_eq!(report.prices.unwrap().median, 12750.0);
    }

    #[tokio::test]
    async fn test_transform_skip_policy_counts_bad_records() {
        let document = TICKETS.replace("\"17:20\"", "\"17h20\"");
        let storage = MockStorage::with_file("tickets.json", &document);

        let mut config = TestConfig::new("tickets.json");
        config.policy = ParseErrorPolicy::Skip;
        let pipeline = TicketPipeline::new(storage, config);

        let records = pipeline.extract().await.unwrap();
        let report = pipeline.transform(records).await.unwrap();
        assert_eq!(report.skipped_records, 1);
        assert_eq!(report.matched_tickets, 1);
    }

    #[tokio::test]
    async fn test_load_writes_output_file() {
        let storage = MockStorage::with_file("tickets.json", TICKETS);
        let mut config = TestConfig::new("tickets.json");
        config.format = OutputFormat::Csv;
        config.output = Some("report.csv".to_string());
        let pipeline = TicketPipeline::new(storage.clone(), config);

        let records = pipeline.extract().await.unwrap();
        let report = pipeline.transform(records).await.unwrap();
        let rendered = pipeline.load(report).await.unwrap();

        let saved = storage.get_file("report.csv").await.unwrap();
        assert_eq!(String::from_utf8(saved).unwrap(), rendered);
        assert!(rendered.contains("TK,350,1"));
    }
}
