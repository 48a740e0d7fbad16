//! Per-lookup accumulator and the finalized match it produces.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;

/// Opaque parameter identifier supplied by the registration layer.
///
/// Identifiers come from the static matcher tree, so `Arc::clone()` is an
/// atomic increment rather than a string copy.
pub type ParamId = Arc<str>;

/// Maximum number of path parameters before heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
pub type ParamVec = SmallVec<[(ParamId, String); MAX_INLINE_PARAMS]>;

/// Mutable state collected while one lookup walks the matcher tree
///
/// Holds the decoded parameters bound so far and the payload of the
/// terminal matcher that ended the chain. One accumulator serves exactly
/// one lookup and is dropped afterwards.
pub struct Match<'m, T> {
    params: ParamVec,
    data: Option<&'m T>,
}

impl<'m, T> Match<'m, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: SmallVec::new(),
            data: None,
        }
    }

    /// Insert a parameter, overwriting any earlier value for the same key
    pub fn bind(&mut self, param: &ParamId, value: String) {
        match self.params.iter_mut().find(|(k, _)| k == param) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((Arc::clone(param), value)),
        }
    }

    #[inline]
    pub fn set_data(&mut self, data: &'m T) {
        self.data = Some(data);
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&'m T> {
        self.data
    }

    /// Immutable copy of the parameters bound so far
    #[must_use]
    pub fn snapshot(&self) -> Params {
        Params {
            entries: self.params.clone(),
        }
    }

    /// Number of parameters currently bound; pair with [`Match::rollback`]
    #[inline]
    pub(crate) fn mark(&self) -> usize {
        self.params.len()
    }

    /// Discard everything bound after `mark` and forget the payload
    pub(crate) fn rollback(&mut self, mark: usize) {
        self.params.truncate(mark);
        self.data = None;
    }

    /// Turn a successful accumulator into its final form.
    ///
    /// Returns `None` when no terminal matcher ever set a payload.
    #[must_use]
    pub fn finish(self) -> Option<RouteMatch<'m, T>> {
        let data = self.data?;
        Some(RouteMatch {
            data,
            params: Params {
                entries: self.params,
            },
        })
    }
}

impl<T> Default for Match<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Match<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("data", &self.data)
            .field("params", &self.params)
            .finish()
    }
}

/// Finalized, read-only path parameters of a successful lookup
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: ParamVec,
}

// Keys are unique, so equality ignores binding order.
impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Params {}

impl Params {
    /// Get a parameter value by identifier
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(identifier, value)` pairs; order carries no meaning
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Convert to a HashMap for callers that want one
    /// Note: This allocates - use get() in hot paths instead
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k.as_ref(), v)?;
        }
        map.end()
    }
}

/// Result of successfully matching a request path
///
/// Borrows the payload from the matcher tree it was found in.
pub struct RouteMatch<'m, T> {
    data: &'m T,
    params: Params,
}

impl<'m, T> RouteMatch<'m, T> {
    /// Payload of the matched route
    #[inline]
    #[must_use]
    pub fn data(&self) -> &'m T {
        self.data
    }

    /// Parameters extracted from the path
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn into_parts(self) -> (&'m T, Params) {
        (self.data, self.params)
    }
}

impl<T> Clone for RouteMatch<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            params: self.params.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for RouteMatch<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.params == other.params
    }
}

impl<T: fmt::Debug> fmt::Debug for RouteMatch<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("data", self.data)
            .field("params", &self.params)
            .finish()
    }
}
