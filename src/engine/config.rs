use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Settings for a search engine. Every field has a default, so partial JSON
/// such as `{"depth": 2}` is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Plies to search
    pub depth: u8,
    /// Seed for the move-order shuffle; `None` draws one from entropy
    pub seed: Option<u64>,
    /// 10 is everything and 0 is nothing
    pub log_level: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            seed: None,
            log_level: 0,
        }
    }
}

impl SearchConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
