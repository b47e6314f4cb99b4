use crate::error::{AnalyzerError, Result};
use crate::history::HISTORY_FILE_NAME;
use resume_analyzer_common::KeywordCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const OWNER_ENV: &str = "RESUME_ANALYZER_OWNER";
const DEFAULT_OWNER: &str = "local";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 履歴の所有者名
    pub owner: Option<String>,
    /// カスタムキーワードカタログ（JSON）
    pub catalog_path: Option<PathBuf>,
    pub report_title: String,
    pub save_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: None,
            catalog_path: None,
            report_title: "Resume Analysis Report".into(),
            save_history: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AnalyzerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("resume-analyzer"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn history_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(HISTORY_FILE_NAME))
    }

    /// 所有者名（環境変数を優先）
    pub fn owner(&self) -> String {
        if let Ok(owner) = std::env::var(OWNER_ENV) {
            if !owner.trim().is_empty() {
                return owner;
            }
        }

        self.owner.clone().unwrap_or_else(|| DEFAULT_OWNER.to_string())
    }

    pub fn set_owner(&mut self, owner: String) -> Result<()> {
        self.owner = Some(owner);
        self.save()
    }

    pub fn set_catalog_path(&mut self, path: Option<PathBuf>) -> Result<()> {
        self.catalog_path = path;
        self.save()
    }

    /// 使用するキーワードカタログを構築（起動時に1回）
    pub fn load_catalog(&self) -> Result<KeywordCatalog> {
        match &self.catalog_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AnalyzerError::FileNotFound(path.display().to_string()));
                }
                Ok(KeywordCatalog::from_file(path)?)
            }
            None => Ok(KeywordCatalog::builtin()),
        }
    }
}
