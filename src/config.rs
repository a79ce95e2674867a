use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "https://osu.ppy.sh/api/v2";
pub const DEFAULT_TOKEN_URL: &str = "https://osu.ppy.sh/oauth/token";

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,

    pub oauth_client_id: u64,
    pub oauth_client_secret: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
}

impl Config {
    pub fn new(client_id: u64, client_secret: impl Into<String>) -> Self {
        Config {
            debug: false,
            oauth_client_id: client_id,
            oauth_client_secret: client_secret.into(),
            api_url: default_api_url(),
            token_url: default_token_url(),
        }
    }

    /// Reads a TOML config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not open config file {:?}", path))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("could not parse config file {:?}", path))?;
        Ok(config)
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_owned()
}
