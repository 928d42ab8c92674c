//! CTE alias generation
//!
//! Every rewrite gets a fresh alias so that a caller nesting rewritten
//! queries never produces two CTEs with the same name.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Prefix for generated aliases
pub const DEFAULT_ALIAS_PREFIX: &str = "tbl";

/// Source of CTE aliases
pub trait AliasGenerator: Send + Sync {
    /// Returns an alias not handed out before by this generator
    fn next_alias(&self) -> String;
}

/// `<prefix>_<8 random hex digits>`
#[derive(Debug, Clone)]
pub struct RandomAliasGenerator {
    prefix: String,
}

impl RandomAliasGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_PREFIX)
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn next_alias(&self) -> String {
        let suffix: u32 = rand::thread_rng().gen();
        format!("{}_{:08x}", self.prefix, suffix)
    }
}

/// `<prefix>_1`, `<prefix>_2`, ... for reproducible SQL
#[derive(Debug)]
pub struct SequentialAliasGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialAliasGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialAliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_PREFIX)
    }
}

impl AliasGenerator for SequentialAliasGenerator {
    fn next_alias(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_{}", self.prefix, n)
    }
}
