use crate::errors::{AppError, AppResult};
use crate::i18n::Language;
use crate::models::RowStyle;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const APP_DIR: &str = "bizdesk";
pub const CONFIG_FILE: &str = "bizdesk.conf";
pub const DATABASE_FILE: &str = "bizdesk.sqlite";

/// Overrides the directory holding the config file (and default DB).
pub const ENV_CONFIG_DIR: &str = "BIZDESK_CONFIG_DIR";
pub const ENV_CHAT_API_KEY: &str = "BIZDESK_CHAT_API_KEY";
pub const ENV_EMAIL_USER_ID: &str = "BIZDESK_EMAIL_USER_ID";

/// Printed in place of credentials.
const REDACTED: &str = "***";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub user_id: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "default_service".to_string(),
            template_id: "bizdesk_notice".to_string(),
            user_id: None,
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Serial device path, e.g. `/dev/ttyUSB0` or `COM3`.
    pub port: Option<String>,
    pub baud: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud: 9600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    pub language: Language,
    pub currency_symbol: String,
    pub chat: ChatConfig,
    pub email: EmailConfig,
    pub device: DeviceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            language: Language::En,
            currency_symbol: "$".to_string(),
            chat: ChatConfig::default(),
            email: EmailConfig::default(),
            device: DeviceConfig::default(),
        }
    }
}

impl Config {
    /// Platform configuration directory (`~/.config/bizdesk` on Linux).
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(ENV_CONFIG_DIR)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Directory holding the default database.
    pub fn data_dir() -> PathBuf {
        if let Ok(dir) = env::var(ENV_CONFIG_DIR)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::data_dir().join(DATABASE_FILE)
    }

    /// Parse YAML, filling every missing field with its default.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {}", e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))
    }

    /// Copy safe to print: credentials are replaced by `***`.
    pub fn redacted(&self) -> Self {
        let mask = |v: &Option<String>| v.as_ref().map(|_| REDACTED.to_string());
        let mut out = self.clone();
        out.chat.api_key = mask(&self.chat.api_key);
        out.email.user_id = mask(&self.email.user_id);
        out
    }

    /// The configuration file as written on disk (defaults when absent).
    pub fn load_file() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// File configuration with env overrides applied.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// Secrets may come from the environment instead of the file.
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var(ENV_CHAT_API_KEY)
            && !key.trim().is_empty()
        {
            self.chat.api_key = Some(key);
        }
        if let Ok(user) = env::var(ENV_EMAIL_USER_ID)
            && !user.trim().is_empty()
        {
            self.email.user_id = Some(user);
        }
    }

    /// Resolve a database name: absolute paths are kept, bare names land in the data dir.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = crate::utils::path::expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::data_dir().join(p)
        }
    }

    /// Create the config file (unless `is_test`) and an empty database file.
    ///
    /// Returns the configuration that was written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load_file()?
        };
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            let dir = Self::config_dir();
            fs::create_dir_all(&dir)?;
            Self::write_file(&Self::config_file(), &config)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }

    /// Currency and language used when rendering rows.
    pub fn row_style(&self) -> RowStyle {
        RowStyle {
            currency: self.currency_symbol.clone(),
            lang: self.language,
        }
    }

    pub fn write_file(path: &Path, cfg: &Config) -> AppResult<()> {
        let yaml = cfg.to_yaml()?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
