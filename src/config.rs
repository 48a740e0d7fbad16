//! # Trie Configuration Module
//!
//! Environment variable-based configuration for lookup behaviour.
//!
//! ## Environment Variables
//!
//! ### `PATHTRIE_DECODE_POLICY`
//!
//! What a lookup does when a wildcard or catch-all segment carries malformed
//! percent-encoding:
//! - `no-match`: the branch fails, sibling routes are still tried
//! - `strict`: the lookup is aborted with a `DecodeError`
//!
//! Default: `no-match`
//!
//! ### `PATHTRIE_SLOW_LOOKUP_US`
//!
//! Lookups slower than this many microseconds are logged at warn level.
//! Accepts decimal (`1000`) or hexadecimal (`0x3e8`).
//!
//! Default: `1000` (1 ms)
//!
//! ## Usage
//!
//! ```rust
//! use pathtrie::config::TrieConfig;
//!
//! let config = TrieConfig::from_env();
//! println!("Decode policy: {:?}", config.decode_policy);
//! ```

use std::env;
use std::time::Duration;

use crate::trie::DecodePolicy;

const DEFAULT_SLOW_LOOKUP_US: u64 = 1000;

/// Lookup configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieConfig {
    /// Handling of malformed percent-encoding (default: no-match)
    pub decode_policy: DecodePolicy,
    /// Lookups above this duration are reported as slow (default: 1 ms)
    pub slow_lookup: Duration,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::NoMatch,
            slow_lookup: Duration::from_micros(DEFAULT_SLOW_LOOKUP_US),
        }
    }
}

impl TrieConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let decode_policy = get("PATHTRIE_DECODE_POLICY")
            .map(|val| parse_policy(&val))
            .unwrap_or_default();
        let slow_lookup_us = get("PATHTRIE_SLOW_LOOKUP_US")
            .and_then(|val| parse_number(&val))
            .unwrap_or(DEFAULT_SLOW_LOOKUP_US);

        TrieConfig {
            decode_policy,
            slow_lookup: Duration::from_micros(slow_lookup_us),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    #[must_use]
    pub fn with_slow_lookup(mut self, threshold: Duration) -> Self {
        self.slow_lookup = threshold;
        self
    }
}

fn parse_policy(val: &str) -> DecodePolicy {
    match val.trim().to_lowercase().as_str() {
        "strict" => DecodePolicy::Strict,
        _ => DecodePolicy::NoMatch,
    }
}

fn parse_number(val: &str) -> Option<u64> {
    let val = val.trim();
    match val.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}
