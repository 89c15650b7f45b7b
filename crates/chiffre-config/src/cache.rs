use std::env;

use serde::{Deserialize, Serialize};

fn default_capacity() -> usize {
    1000
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of memoized conversions, 0 disables the cache
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl CacheConfig {
    pub fn new() -> Self {
        let capacity = env::var("CHIFFRE_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_capacity);

        Self { capacity }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}
