use crate::core::ConfigProvider;
use crate::domain::model::{MedianMode, OutputFormat, ParseErrorPolicy, Route};
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{
    validate_airport_code, validate_distinct, validate_path, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub route: RouteConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub origin: String,
    pub destination: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        let route = Route::default();
        Self {
            origin: route.origin,
            destination: route.destination,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub median_mode: MedianMode,
    #[serde(default)]
    pub on_parse_error: ParseErrorPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| TicketError::InputAccessError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TicketError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TICKETS_PATH})，未設定的變數保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let input = validate_required_field("source.path", &self.source.path)?;
        validate_path("source.path", input)?;

        validate_airport_code("route.origin", &self.route.origin)?;
        validate_airport_code("route.destination", &self.route.destination)?;
        validate_distinct("route", &self.route.origin, &self.route.destination)?;

        if let Some(output) = &self.output.path {
            validate_path("output.path", output)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        // validate_config 保證 source.path 存在
        self.source.path.as_deref().unwrap_or_default()
    }

    fn route(&self) -> Route {
        Route::new(&self.route.origin, &self.route.destination)
    }

    fn median_mode(&self) -> MedianMode {
        self.analysis.median_mode
    }

    fn parse_error_policy(&self) -> ParseErrorPolicy {
        self.analysis.on_parse_error
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
