use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Cannot access ticket data at {path}: {source}")]
    InputAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Record #{record}: invalid field '{field}': {reason}")]
    ParseError {
        record: usize,
        field: String,
        reason: String,
    },

    #[error("Invalid ticket document: {message}")]
    InvalidDocument { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 設定或輸入內容有誤，使用者可自行修正
    High,
    /// 無法存取資料來源或輸出目的地
    Critical,
}

impl TicketError {
    pub fn parse(record: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        TicketError::ParseError {
            record,
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TicketError::InputAccessError { .. } | TicketError::IoError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TicketError::InputAccessError { .. } => {
                "Check that the input file exists and is readable (--input)"
            }
            TicketError::ParseError { .. } => {
                "Fix the malformed record or rerun with --on-parse-error skip"
            }
            TicketError::InvalidDocument { .. } | TicketError::SerializationError(_) => {
                "The input must be a JSON object with a \"tickets\" array"
            }
            TicketError::ConfigError { .. }
            | TicketError::InvalidConfigValueError { .. }
            | TicketError::MissingConfigError { .. } => "Review the command line flags or config file",
            TicketError::CsvError(_) | TicketError::IoError(_) => {
                "Check that the output location is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TicketError::InputAccessError { path, .. } => {
                format!("Error reading the JSON file: {}", path)
            }
            TicketError::ParseError {
                record,
                field,
                reason,
            } => format!("Ticket #{} has an invalid '{}': {}", record, field, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
