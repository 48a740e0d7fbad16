//! # Trie Module
//!
//! The route-matching core: a compiled tree of [`Matcher`] nodes and the
//! lookup that walks it for each incoming request path.
//!
//! ## Overview
//!
//! - [`Path`] wraps the request path for the duration of one lookup
//! - [`Match`] accumulates decoded parameters and the terminal payload
//! - [`Matcher`] is the tree itself: Static, Wild, CatchAll, Data, Linear
//! - [`lookup`] / [`lookup_with`] run a matcher against a path
//! - [`Trie`] and [`SharedTrie`] hold a tree in service
//!
//! Building the tree from route patterns is the registration layer's job;
//! this module only provides the node constructors.
//!
//! ## Example
//!
//! ```rust
//! use pathtrie::trie::{lookup, Matcher};
//!
//! # fn main() -> Result<(), pathtrie::BuildError> {
//! let matcher = Matcher::static_path(
//!     "/auth/",
//!     Matcher::linear(vec![
//!         Matcher::static_path("login", Matcher::data(1))?,
//!         Matcher::static_path("recovery", Matcher::data(2))?,
//!     ])?,
//! )?;
//!
//! let found = lookup(&matcher, "/auth/login").unwrap();
//! assert_eq!(*found.data(), 1);
//! assert!(found.parameters().is_empty());
//! assert!(lookup(&matcher, "/auth/other").is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! A matcher tree is never mutated after construction and each lookup owns
//! its own `Path` and `Match`, so any number of threads may look up against
//! the same tree without locking.

mod core;
mod decode;
mod matcher;
mod params;
mod path;
mod shared;
#[cfg(test)]
mod performance_tests;

pub use self::core::{lookup, lookup_with, Trie};
pub use decode::{decode, needs_decoding};
pub use matcher::{DecodePolicy, Matcher};
pub use params::{Match, ParamId, ParamVec, Params, RouteMatch, MAX_INLINE_PARAMS};
pub use path::Path;
pub use shared::SharedTrie;
