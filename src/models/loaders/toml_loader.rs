use crate::config::{ArxivSettings, TranslationSettings};
use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::keywords::KeywordWeights;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 配置文件内容
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// arXiv 检索条件，例如 `cat:cs.CV`
    pub subject: String,
    pub keywords: KeywordWeights,
    #[serde(default)]
    pub translation: TranslationSettings,
    #[serde(default)]
    pub arxiv: ArxivSettings,
}

impl Settings {
    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> AppResult<()> {
        if self.subject.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "subject" }.into());
        }
        if self.translation.poll_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "translation.poll_attempts",
                value: "0".to_string(),
            }
            .into());
        }
        if self.arxiv.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "arxiv.max_results",
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// 从 TOML 文件加载配置
pub async fn load_settings(path: &Path) -> Result<Settings> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(AppError::File(FileError::NotFound { path: display }).into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&display, e))?;

    let settings: Settings = toml::from_str(&content).map_err(|e| {
        AppError::File(FileError::TomlParseFailed {
            path: display.clone(),
            source: e,
        })
    })?;
    settings
        .validate()
        .with_context(|| format!("配置文件校验失败: {}", display))?;

    tracing::info!(
        "已加载配置: 检索条件 '{}'，关键词 {} 个",
        settings.subject,
        settings.keywords.len()
    );

    Ok(settings)
}
