//! Endpoint constants and layered client configuration.
//!
//! [`TcgConfig`] is assembled from serde defaults, an optional TOML file, and
//! `POKEMONTCG_*` environment variables, in that order of precedence.

use std::path::Path;

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const API_BASE: &str = "https://api.pokemontcg.io/v2";

/// Header carrying the static API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Prefix for environment overrides (`POKEMONTCG_API_KEY`, ...).
pub const ENV_PREFIX: &str = "POKEMONTCG_";

pub const CARDS_PATH: &str = "/cards";
pub const SETS_PATH: &str = "/sets";
pub const RARITIES_PATH: &str = "/rarities";
pub const TYPES_PATH: &str = "/types";
pub const SUBTYPES_PATH: &str = "/subtypes";
pub const SUPERTYPES_PATH: &str = "/supertypes";

/// Client configuration.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TcgConfig {
    /// Static key forwarded in the `X-Api-Key` header. Empty means keyless.
    #[serde(default)]
    pub api_key: String,
    /// Base URL every resource path is appended to.
    pub endpoint: String,
    /// Request timeout in seconds. `None` keeps the HTTP client default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TcgConfig {
    fn default() -> Self {
        TcgConfig {
            api_key: String::new(),
            endpoint: API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

impl TcgConfig {
    /// Reads the config from the environment only.
    pub fn from_env() -> Result<TcgConfig> {
        Figment::new()
            .merge(Serialized::defaults(TcgConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Into::into)
    }

    /// Reads the config from a TOML file, with environment overrides on top.
    ///
    /// A missing file is not an error; the defaults and environment apply.
    pub fn load(config_path: impl AsRef<Path>) -> Result<TcgConfig> {
        Figment::new()
            .merge(Serialized::defaults(TcgConfig::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Into::into)
    }
}
