use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Credentials for the private API (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeys {
    /// Public API key component, sent as the `API-Key` header.
    pub public_key: String,
    /// Secret key used to sign the request payload.
    pub secret_key: String,
}

/// Global configuration loaded from `~/.config/bmk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmkConfig {
    /// Host name of the exchange API endpoint.
    pub host: String,
    /// Path of the capture file the raw dispatcher writes the response
    /// body to. Relative paths resolve against the current directory.
    pub output_file: PathBuf,
    /// Optional private API credentials; if missing, only the public API
    /// and the raw dispatcher are usable.
    #[serde(default)]
    pub api: Option<ApiKeys>,
}

impl Default for BmkConfig {
    fn default() -> Self {
        Self {
            host: "www.bitmarket.pl".to_string(),
            // Legacy capture file name, kept for script compatibility.
            output_file: PathBuf::from("python_json_output"),
            api: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bmk")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BmkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BmkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BmkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
