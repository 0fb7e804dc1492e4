use crate::error::{QrManagerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データディレクトリを上書きする環境変数
pub const DATA_DIR_ENV: &str = "QR_MANAGER_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub default_export: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| QrManagerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("qr-manager").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            data_dir: None,
            default_export: PathBuf::from(qr_manager_common::BACKUP_FILE_NAME),
        }
    }

    /// データディレクトリを決定
    ///
    /// 優先順: 引数 → 環境変数 → 設定ファイル → OS標準のデータディレクトリ
    pub fn resolve_data_dir(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = flag {
            return Ok(dir.to_path_buf());
        }
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("qr-manager"))
            .ok_or_else(|| QrManagerError::Config("データディレクトリが見つかりません".into()))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.set_data_dir_at(dir, &Self::config_path()?)
    }

    /// データディレクトリを設定して `config_path` へ保存
    pub fn set_data_dir_at(&mut self, dir: PathBuf, config_path: &Path) -> Result<()> {
        self.data_dir = Some(dir);
        self.save_to(config_path)
    }
}
