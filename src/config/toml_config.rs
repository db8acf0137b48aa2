use crate::core::ConfigProvider;
use crate::utils::error::{BlocklistError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_REQUEST_TIMEOUT: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct BlocklistConfig {
    pub sources: Vec<String>,
    pub output_file: String,
    pub request_timeout: Option<u64>,
    pub cidr_first: Option<bool>,
}

impl BlocklistConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| BlocklistError::ConfigLoadError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BlocklistError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BLOCKLIST_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("output_file", &self.output_file)?;

        if let Some(timeout) = self.request_timeout {
            validation::validate_positive_number("request_timeout", timeout, 1)?;
        }

        if self.sources.is_empty() {
            tracing::warn!("No sources configured, the blocklist will only contain the header");
        }

        Ok(())
    }
}

impl ConfigProvider for BlocklistConfig {
    fn sources(&self) -> &[String] {
        &self.sources
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn request_timeout(&self) -> u64 {
        self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }

    fn cidr_first(&self) -> bool {
        self.cidr_first.unwrap_or(true)
    }
}

impl Validate for BlocklistConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
