//! Lookup entry points - hot path for request routing.
//!
//! [`lookup`] is the bare contract consumed by a dispatch layer: build a
//! [`Path`], a fresh [`Match`], run the root matcher from offset 0. [`Trie`]
//! wraps a root matcher with its [`TrieConfig`] and adds structured logging
//! around each lookup.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::TrieConfig;
use crate::error::DecodeError;

use super::matcher::{DecodePolicy, Matcher};
use super::params::{Match, RouteMatch};
use super::path::Path;

/// Match `path` against `matcher`.
///
/// Malformed percent-encoding makes the affected branch fail, so `None`
/// covers both "no route" and "no route with decodable parameters".
#[must_use]
pub fn lookup<'m, T>(matcher: &'m Matcher<T>, path: &str) -> Option<RouteMatch<'m, T>> {
    lookup_with(matcher, path, DecodePolicy::NoMatch).unwrap_or(None)
}

/// Match `path` against `matcher` using an explicit [`DecodePolicy`].
pub fn lookup_with<'m, T>(
    matcher: &'m Matcher<T>,
    path: &str,
    policy: DecodePolicy,
) -> Result<Option<RouteMatch<'m, T>>, DecodeError> {
    let path = Path::new(path);
    let mut acc = Match::new();
    if matcher.match_at(0, &path, &mut acc, policy)? {
        Ok(acc.finish())
    } else {
        Ok(None)
    }
}

/// A compiled matcher tree together with its lookup configuration
///
/// Immutable once built. Share it behind an `Arc` (or a
/// [`SharedTrie`](super::SharedTrie)) to serve lookups from many threads.
#[derive(Debug, Clone)]
pub struct Trie<T> {
    root: Matcher<T>,
    config: TrieConfig,
}

impl<T> Trie<T> {
    #[must_use]
    pub fn new(root: Matcher<T>) -> Self {
        Self::with_config(root, TrieConfig::default())
    }

    #[must_use]
    pub fn with_config(root: Matcher<T>, config: TrieConfig) -> Self {
        info!(
            depth = root.depth(),
            decode_policy = ?config.decode_policy,
            slow_lookup_us = config.slow_lookup.as_micros(),
            "Route trie loaded"
        );
        Self { root, config }
    }

    #[must_use]
    pub fn root(&self) -> &Matcher<T> {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Match a request path
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RouteMatch))` - a route matched
    /// * `Ok(None)` - no route matched (results in 404)
    /// * `Err(DecodeError)` - only with [`DecodePolicy::Strict`], a segment
    ///   could not be decoded
    pub fn lookup(&self, path: &str) -> Result<Option<RouteMatch<'_, T>>, DecodeError> {
        debug!(path = %path, "Route lookup attempt");

        let start = Instant::now();
        let result = lookup_with(&self.root, path, self.config.decode_policy);
        let elapsed = start.elapsed();

        match &result {
            Ok(Some(found)) => {
                if elapsed > self.config.slow_lookup {
                    warn!(
                        path = %path,
                        params = ?found.parameters(),
                        duration_us = elapsed.as_micros(),
                        "Slow route lookup detected"
                    );
                } else {
                    debug!(
                        path = %path,
                        params = ?found.parameters(),
                        duration_us = elapsed.as_micros(),
                        "Route matched"
                    );
                }
            }
            Ok(None) => {
                debug!(
                    path = %path,
                    duration_us = elapsed.as_micros(),
                    "No route matched"
                );
            }
            Err(err) => {
                warn!(
                    path = %path,
                    offset = err.offset(),
                    error = %err,
                    "Route lookup rejected undecodable path"
                );
            }
        }

        result
    }
}
