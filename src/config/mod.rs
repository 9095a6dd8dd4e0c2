use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config, read_config_from};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

/// `database_uri` value that selects the in-process catalog store.
pub const MEMORY_DATABASE_URI: &str = "memory://";

#[derive(Debug, Deserialize)]
pub struct Config {
    host: Host,
    app: App,
}

#[derive(Debug, Deserialize)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Deserialize)]
pub struct App {
    database_uri: String,
    #[serde(default)]
    docs: bool,
    /// Apply each reorder batch inside a single transaction instead of
    /// issuing concurrent independent updates.
    #[serde(default)]
    reorder_in_transaction: bool,
    #[serde(default = "default_max_connections")]
    max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    pub fn from_toml(bytes: &[u8]) -> ConfigResult<Self> {
        Ok(toml::from_slice(bytes)?)
    }

    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                let read_cfg = |use_local| -> ConfigResult<Self> {
                    let bytes = read_config(use_local)?;
                    Self::from_toml(&bytes)
                };

                match read_cfg(use_local) {
                    Ok(c) => c,
                    Err(ConfigError::ConfigNotFound(path)) => {
                        tracing::error!("Config not found at {}.", path.display());
                        std::process::exit(1);
                    }
                    Err(e) => {
                        crate::error::log_error(&e);
                        std::process::exit(1);
                    }
                }
            })
            .await
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn database_uri(&self) -> &str {
        &self.database_uri
    }

    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }

    #[inline]
    pub fn reorder_in_transaction(&self) -> bool {
        self.reorder_in_transaction
    }

    #[inline]
    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_uri.starts_with(MEMORY_DATABASE_URI)
    }
}
