//! # pathtrie
//!
//! The route-matching engine underneath an HTTP router. A set of registered
//! path patterns is compiled (by the router's registration layer) into an
//! immutable tree of composable matchers; for every incoming request path the
//! tree decides which route matches, extracts the path parameters, and
//! returns the data attached to that route.
//!
//! ## Modules
//!
//! - **[`trie`]** - path wrapper, matcher variants, accumulator, lookup
//! - **[`config`]** - environment-driven lookup configuration
//! - **[`logging`]** - `tracing-subscriber` setup for embedding binaries
//! - **[`error`]** - decode and construction errors
//!
//! ## Precedence
//!
//! Alternatives under a Linear node are tried deepest first, so
//! `/auth/login` wins over `/auth/{anything}` and both win over a catch-all
//! at the same position. Children of equal depth keep registration order.
//!
//! ## Not covered
//!
//! Route syntax validation, tree merging, caching of compiled trees, and
//! host/port/scheme matching are left to the router built on top.

pub mod config;
pub mod error;
pub mod logging;
pub mod trie;

pub use config::TrieConfig;
pub use error::{BuildError, DecodeError};
pub use trie::{lookup, lookup_with, DecodePolicy, Matcher, Params, RouteMatch, SharedTrie, Trie};
