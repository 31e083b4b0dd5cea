#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub users_endpoint: String,
    pub posts_endpoint: String,
    pub comments_endpoint: String,
    /// 未設定時不逾時
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            users_endpoint: format!("{}/users", DEFAULT_API_BASE),
            posts_endpoint: format!("{}/posts", DEFAULT_API_BASE),
            comments_endpoint: format!("{}/comments", DEFAULT_API_BASE),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "output".to_string(),
            file_name: "output.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl GatewayConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.server.host.as_str(), self.server.port)
    }

    pub fn output_directory(&self) -> &str {
        &self.output.directory
    }
}

impl ConfigProvider for GatewayConfig {
    fn users_endpoint(&self) -> &str {
        &self.source.users_endpoint
    }

    fn posts_endpoint(&self) -> &str {
        &self.source.posts_endpoint
    }

    fn comments_endpoint(&self) -> &str {
        &self.source.comments_endpoint
    }

    fn output_file_name(&self) -> &str {
        &self.output.file_name
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.users_endpoint", &self.source.users_endpoint)?;
        validation::validate_url("source.posts_endpoint", &self.source.posts_endpoint)?;
        validation::validate_url("source.comments_endpoint", &self.source.comments_endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        validation::validate_path("output.directory", &self.output.directory)?;
        validation::validate_file_name("output.file_name", &self.output.file_name, "csv")?;

        validation::validate_path("server.host", &self.server.host)?;
        validation::validate_positive_number("server.port", u64::from(self.server.port), 1)?;

        Ok(())
    }
}
