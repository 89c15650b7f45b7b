use std::env;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;

pub mod cache;

fn default_max_input_len() -> usize {
    1024
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub cache: CacheConfig,

    /// Longest accepted input, in characters after normalization
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
}

impl Config {
    /// Defaults overridden by `CHIFFRE_*` environment variables
    pub fn new() -> Self {
        let max_input_len = env::var("CHIFFRE_MAX_INPUT_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_input_len);

        Config {
            cache: CacheConfig::new(),
            max_input_len,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            max_input_len: default_max_input_len(),
        }
    }
}
