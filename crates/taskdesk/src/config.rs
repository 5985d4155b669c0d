/*
[INPUT]:  YAML configuration file and TASKDESK__* environment overrides
[OUTPUT]: Parsed, validated taskdesk configuration
[POS]:    Configuration layer - backend connection and acting user
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use taskdesk_adapter::{ClientConfig, TaskdeskClient};
use url::Url;

use crate::identity::Identity;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskdeskConfig {
    /// Backend connection settings
    #[serde(default)]
    pub server: ServerConfig,
    /// User the board acts as
    #[serde(default)]
    pub identity: Identity,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Backend origin, e.g. "http://localhost:3000"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl TaskdeskConfig {
    /// Load configuration from a YAML file, then apply environment overrides
    /// such as `TASKDESK__SERVER__BASE_URL`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Yaml))
            .add_source(
                config::Environment::with_prefix("TASKDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("read config {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("config does not match expected schema")?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/taskdesk/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskdesk").join("config.yaml"))
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.server.base_url)
            .with_context(|| format!("invalid server.base_url '{}'", self.server.base_url))?;
        if self.server.timeout_secs == 0 {
            bail!("server.timeout_secs must be greater than zero");
        }
        if self.server.connect_timeout_secs == 0 {
            bail!("server.connect_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.server.timeout_secs),
            connect_timeout: Duration::from_secs(self.server.connect_timeout_secs),
        }
    }

    pub fn build_client(&self) -> Result<TaskdeskClient> {
        TaskdeskClient::with_config_and_base_url(self.client_config(), &self.server.base_url)
            .context("build task backend client")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize config to YAML")
    }
}
