use crate::core::{IntervalSet, MarkupOptions};
use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const MAX_SAMPLE_COUNT: u64 = 1_000_000;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub markup: MarkupConfig,
    pub sampler: SamplerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub images_width: Option<u32>,
    pub images_height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub intervals: Option<Vec<[f64; 2]>>,
    pub seed: Option<u64>,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| UtilsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${IMAGE_WIDTH})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn markup_options(&self) -> MarkupOptions {
        MarkupOptions::from(&self.markup)
    }

    pub fn sample_count(&self) -> u64 {
        self.sampler.count.unwrap_or(1)
    }

    pub fn log_json(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl From<&MarkupConfig> for MarkupOptions {
    fn from(config: &MarkupConfig) -> Self {
        MarkupOptions {
            images_width: config.images_width,
            images_height: config.images_height,
        }
    }
}

impl SamplerConfig {
    /// 取得已驗證的區間集合
    pub fn interval_set(&self) -> Result<IntervalSet> {
        let intervals = validation::validate_required_field("sampler.intervals", &self.intervals)?;
        let pairs: Vec<(f64, f64)> = intervals.iter().map(|[low, high]| (*low, *high)).collect();

        IntervalSet::from_pairs(&pairs).map_err(|e| UtilsError::InvalidConfigValueError {
            field: "sampler.intervals".to_string(),
            value: format!("{:?}", intervals),
            reason: e.to_string(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(width) = self.markup.images_width {
            validation::validate_positive_number("markup.images_width", width.into(), 1)?;
        }
        if let Some(height) = self.markup.images_height {
            validation::validate_positive_number("markup.images_height", height.into(), 1)?;
        }

        // 區間是選填的，有填才檢查
        if self.sampler.intervals.is_some() {
            self.sampler.interval_set()?;
        }
        if let Some(count) = self.sampler.count {
            validation::validate_range("sampler.count", count, 1, MAX_SAMPLE_COUNT)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.markup_options(), MarkupOptions::default());
        assert_eq!(config.sample_count(), 1);
        assert!(!config.log_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_document() {
        let config = TomlConfig::from_toml_str(
            r#"
[markup]
images_width = 100
images_height = 80

[sampler]
intervals = [[1.0, 4.0], [8.0, 16.0]]
seed = 42
count = 3

[logging]
level = "debug"
json = true
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.markup_options().images_width, Some(100));
        assert_eq!(config.markup_options().images_height, Some(80));
        assert_eq!(config.sampler.seed, Some(42));
        assert_eq!(config.sample_count(), 3);
        assert_eq!(config.sampler.interval_set().unwrap().total_size(), 11.0);
        assert!(config.log_json());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = TomlConfig::from_toml_str("[markup]\nimages_width = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(UtilsError::InvalidConfigValueError { .. })
        ));

        let config = TomlConfig::from_toml_str("[sampler]\nintervals = [[5.0, 1.0]]\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[sampler]\nintervals = []\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_intervals() {
        let config = TomlConfig::default();
        assert!(matches!(
            config.sampler.interval_set(),
            Err(UtilsError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[markup\nimages_width ="),
            Err(UtilsError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let out = TomlConfig::substitute_env_vars("level = \"${UI_UTILS_SURELY_UNSET_VAR}\"");
        assert_eq!(out, "level = \"${UI_UTILS_SURELY_UNSET_VAR}\"");
    }
}
