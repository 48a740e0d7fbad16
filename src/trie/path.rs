/// Request path as seen by the matchers
///
/// Built once per lookup and only ever read afterwards. Matching works on
/// bytes: every delimiter the trie cares about (`/`, `%`, `+`) is ASCII, so
/// each split point is also a valid UTF-8 boundary of the original string.
#[derive(Debug, Clone, Copy)]
pub struct Path<'p> {
    value: &'p str,
}

impl<'p> Path<'p> {
    #[inline]
    #[must_use]
    pub fn new(value: &'p str) -> Self {
        Self { value }
    }

    /// Length of the path in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'p str {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'p [u8] {
        self.value.as_bytes()
    }

    /// Byte at `index`, `None` past the end
    #[inline]
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Whether `literal` occurs at `offset`
    #[inline]
    pub(crate) fn has_literal_at(&self, offset: usize, literal: &[u8]) -> bool {
        self.as_bytes()
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(literal))
    }

    /// Sub-slice `[start, end)`; callers only pass ASCII-delimited bounds
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'p str {
        self.value.get(start..end).unwrap_or_default()
    }
}

impl<'p> From<&'p str> for Path<'p> {
    fn from(value: &'p str) -> Self {
        Self::new(value)
    }
}
