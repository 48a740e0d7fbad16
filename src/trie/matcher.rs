//! Matcher tree: the composable nodes a compiled route trie is made of.
//!
//! A tree is built once by the registration layer and then shared read-only
//! by every lookup. Matching is a depth-first search with backtracking:
//!
//! - **Static** consumes a fixed literal and commits to its child
//! - **Wild** consumes one non-empty segment up to the next `/`
//! - **CatchAll** consumes whatever is left, `/` included
//! - **Data** ends a chain when the whole path has been consumed
//! - **Linear** tries its children in precedence order
//!
//! Parameters are bound on the way back up, after the subtree beneath a
//! wildcard has already matched, so a failed branch never leaves values in
//! the accumulator.
//!
//! ## Precedence
//!
//! Linear children are ordered once, at construction, by descending
//! [`Matcher::depth`]. Deeper subtrees are more specific continuations and
//! are tried before shallow ones such as a catch-all. Children of equal
//! depth keep the order they were supplied in.

use std::fmt;

use crate::error::{BuildError, DecodeError};

use super::decode::{decode, needs_decoding};
use super::params::{Match, ParamId};
use super::path::Path;

/// What to do when an extracted segment carries broken percent-encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// The branch fails and Linear siblings are still tried
    #[default]
    NoMatch,
    /// The whole lookup is aborted with a [`DecodeError`]
    Strict,
}

/// Immutable node of a compiled route trie
#[derive(Debug, Clone)]
pub enum Matcher<T> {
    Static {
        literal: Box<str>,
        child: Box<Matcher<T>>,
    },
    Wild {
        param: ParamId,
        child: Box<Matcher<T>>,
    },
    CatchAll {
        param: ParamId,
        data: T,
    },
    Data {
        data: T,
    },
    Linear {
        /// Children in precedence order
        children: Vec<Matcher<T>>,
        depth: usize,
    },
}

impl<T> Matcher<T> {
    /// Match a fixed literal, then delegate to `child`
    pub fn static_path(literal: impl Into<Box<str>>, child: Matcher<T>) -> Result<Self, BuildError> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(BuildError::EmptyLiteral);
        }
        Ok(Matcher::Static {
            literal,
            child: Box::new(child),
        })
    }

    /// Bind one non-empty segment to `param`, then delegate to `child`
    pub fn wild(param: impl Into<ParamId>, child: Matcher<T>) -> Result<Self, BuildError> {
        let param = param.into();
        if param.is_empty() {
            return Err(BuildError::EmptyParameter);
        }
        Ok(Matcher::Wild {
            param,
            child: Box::new(child),
        })
    }

    /// Bind the rest of the path to `param` and end with `data`
    pub fn catch_all(param: impl Into<ParamId>, data: T) -> Result<Self, BuildError> {
        let param = param.into();
        if param.is_empty() {
            return Err(BuildError::EmptyParameter);
        }
        Ok(Matcher::CatchAll { param, data })
    }

    /// Terminal that matches only a fully consumed path
    #[must_use]
    pub fn data(data: T) -> Self {
        Matcher::Data { data }
    }

    /// Ordered alternation over `children`.
    ///
    /// Children are stably sorted by descending depth here and never again.
    pub fn linear(children: impl IntoIterator<Item = Matcher<T>>) -> Result<Self, BuildError> {
        let mut children: Vec<Matcher<T>> = children.into_iter().collect();
        if children.is_empty() {
            return Err(BuildError::EmptyLinear);
        }
        // slice::sort_by_key is stable
        children.sort_by_key(|child| std::cmp::Reverse(child.depth()));
        let depth = children.iter().map(Matcher::depth).max().unwrap_or(1);
        Ok(Matcher::Linear { children, depth })
    }

    /// Number of nodes on the longest chain down to a terminal
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Matcher::Static { child, .. } | Matcher::Wild { child, .. } => child.depth() + 1,
            Matcher::CatchAll { .. } | Matcher::Data { .. } => 1,
            Matcher::Linear { depth, .. } => *depth,
        }
    }

    /// Children of a Linear node in the order they are tried
    #[must_use]
    pub fn alternatives(&self) -> &[Matcher<T>] {
        match self {
            Matcher::Linear { children, .. } => children,
            _ => &[],
        }
    }

    /// Try to match `path` from byte offset `pos`.
    ///
    /// Returns `Ok(true)` when the accumulator now holds a complete match.
    /// `Err` only surfaces under [`DecodePolicy::Strict`].
    pub fn match_at<'m>(
        &'m self,
        pos: usize,
        path: &Path<'_>,
        acc: &mut Match<'m, T>,
        policy: DecodePolicy,
    ) -> Result<bool, DecodeError> {
        match self {
            Matcher::Static { literal, child } => {
                if !path.has_literal_at(pos, literal.as_bytes()) {
                    return Ok(false);
                }
                child.match_at(pos + literal.len(), path, acc, policy)
            }
            Matcher::Data { data } => {
                if pos != path.len() {
                    return Ok(false);
                }
                acc.set_data(data);
                Ok(true)
            }
            Matcher::Wild { param, child } => {
                let bytes = path.as_bytes();
                if pos >= bytes.len() || bytes[pos] == b'/' {
                    return Ok(false);
                }

                // single pass: find the delimiter and note whether decoding is needed
                let mut end = pos;
                let mut has_percent = false;
                while end < bytes.len() && bytes[end] != b'/' {
                    has_percent |= bytes[end] == b'%';
                    end += 1;
                }

                let mark = acc.mark();
                if !child.match_at(end, path, acc, policy)? {
                    return Ok(false);
                }
                match decode(path, pos, end, has_percent) {
                    Ok(value) => {
                        acc.bind(param, value.into_owned());
                        Ok(true)
                    }
                    Err(err) => reject(err, acc, mark, policy),
                }
            }
            Matcher::CatchAll { param, data } => {
                if pos >= path.len() {
                    return Ok(false);
                }
                let end = path.len();
                let mark = acc.mark();
                match decode(path, pos, end, needs_decoding(path, pos, end)) {
                    Ok(value) => {
                        acc.bind(param, value.into_owned());
                        acc.set_data(data);
                        Ok(true)
                    }
                    Err(err) => reject(err, acc, mark, policy),
                }
            }
            Matcher::Linear { children, .. } => {
                for child in children {
                    if child.match_at(pos, path, acc, policy)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

fn reject<T>(
    err: DecodeError,
    acc: &mut Match<'_, T>,
    mark: usize,
    policy: DecodePolicy,
) -> Result<bool, DecodeError> {
    match policy {
        DecodePolicy::NoMatch => {
            acc.rollback(mark);
            Ok(false)
        }
        DecodePolicy::Strict => Err(err),
    }
}

impl<T: fmt::Display> fmt::Display for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Static { literal, child } => write!(f, "[\"{literal}\" {child}]"),
            Matcher::Wild { param, child } => write!(f, "[:{param} {child}]"),
            Matcher::CatchAll { param, data } => write!(f, "[:{param} {data}]"),
            Matcher::Data { data } => write!(f, "{data}"),
            Matcher::Linear { children, .. } => {
                f.write_str("[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<'m, T>(matcher: &'m Matcher<T>, path: &str) -> Option<(&'m T, Vec<(String, String)>)> {
        let path = Path::new(path);
        let mut acc = Match::new();
        if !matcher.match_at(0, &path, &mut acc, DecodePolicy::NoMatch).unwrap() {
            return None;
        }
        let params = acc
            .snapshot()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Some((acc.data().unwrap(), params))
    }

    #[test]
    fn test_static_exact() {
        let m = Matcher::static_path("/kikka", Matcher::data(1)).unwrap();
        assert_eq!(run(&m, "/kikka"), Some((&1, vec![])));
        assert_eq!(run(&m, "/kikk"), None);
        assert_eq!(run(&m, "/kikka/"), None);
        assert_eq!(run(&m, "/KIKKA"), None);
    }

    #[test]
    fn test_data_requires_full_consumption() {
        let m: Matcher<u8> = Matcher::data(1);
        assert!(run(&m, "").is_some());
        assert!(run(&m, "/").is_none());
    }

    #[test]
    fn test_wild_binds_segment() {
        let m = Matcher::static_path(
            "/kikka/",
            Matcher::wild("kukka", Matcher::static_path("/kikka", Matcher::data(1)).unwrap())
                .unwrap(),
        )
        .unwrap();
        let (data, params) = run(&m, "/kikka/abc/kikka").unwrap();
        assert_eq!(*data, 1);
        assert_eq!(params, vec![("kukka".to_string(), "abc".to_string())]);
        assert!(run(&m, "/kikka//kikka").is_none());
    }

    #[test]
    fn test_wild_rejects_empty_segment() {
        let m = Matcher::static_path("/items/", Matcher::wild("id", Matcher::data(1)).unwrap())
            .unwrap();
        assert!(run(&m, "/items/").is_none());
        assert_eq!(
            run(&m, "/items/x"),
            Some((&1, vec![("id".to_string(), "x".to_string())]))
        );
    }

    #[test]
    fn test_wild_does_not_shrink() {
        // "{a}b" can never match: the wildcard always runs to the delimiter
        let m = Matcher::wild("a", Matcher::static_path("b", Matcher::data(1)).unwrap()).unwrap();
        assert!(run(&m, "ab").is_none());
    }

    #[test]
    fn test_catch_all() {
        let m = Matcher::static_path("/files/", Matcher::catch_all("rest", 9).unwrap()).unwrap();
        let (data, params) = run(&m, "/files/a/b/c").unwrap();
        assert_eq!(*data, 9);
        assert_eq!(params, vec![("rest".to_string(), "a/b/c".to_string())]);
        assert!(run(&m, "/files/").is_none());
    }

    #[test]
    fn test_depth() {
        let leaf: Matcher<u8> = Matcher::data(1);
        assert_eq!(leaf.depth(), 1);
        let chain = Matcher::static_path("/a", Matcher::wild("b", Matcher::data(1)).unwrap()).unwrap();
        assert_eq!(chain.depth(), 3);
        let linear = Matcher::linear(vec![chain, Matcher::catch_all("r", 2).unwrap()]).unwrap();
        assert_eq!(linear.depth(), 3);
    }

    #[test]
    fn test_linear_sorted_by_depth() {
        let shallow = Matcher::catch_all("rest", 1).unwrap();
        let deep = Matcher::static_path("x", Matcher::static_path("y", Matcher::data(2)).unwrap())
            .unwrap();
        let linear = Matcher::linear(vec![shallow, deep]).unwrap();
        let depths: Vec<usize> = linear.alternatives().iter().map(Matcher::depth).collect();
        assert_eq!(depths, vec![3, 1]);
        assert_eq!(run(&linear, "xy"), Some((&2, vec![])));
    }

    #[test]
    fn test_build_errors() {
        assert_eq!(
            Matcher::static_path("", Matcher::data(1)).unwrap_err(),
            BuildError::EmptyLiteral
        );
        assert_eq!(
            Matcher::wild("", Matcher::data(1)).unwrap_err(),
            BuildError::EmptyParameter
        );
        assert_eq!(
            Matcher::catch_all("", 1).unwrap_err(),
            BuildError::EmptyParameter
        );
        assert_eq!(
            Matcher::<u8>::linear(Vec::new()).unwrap_err(),
            BuildError::EmptyLinear
        );
    }

    #[test]
    fn test_display() {
        let m = Matcher::linear(vec![Matcher::static_path(
            "/auth/",
            Matcher::linear(vec![
                Matcher::static_path("login", Matcher::data(1)).unwrap(),
                Matcher::static_path("recovery", Matcher::data(2)).unwrap(),
            ])
            .unwrap(),
        )
        .unwrap()])
        .unwrap();
        assert_eq!(m.to_string(), "[[\"/auth/\" [[\"login\" 1], [\"recovery\" 2]]]]");

        let w = Matcher::wild("id", Matcher::catch_all("rest", 3).unwrap()).unwrap();
        assert_eq!(w.to_string(), "[:id [:rest 3]]");
    }
}
