use std::fmt;

/// Parameter decoding error
///
/// Raised while extracting a wildcard or catch-all value whose percent
/// encoding cannot be turned back into a string. Offsets are byte offsets
/// into the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` that is not followed by two hexadecimal digits
    MalformedEscape {
        /// Position of the offending `%`
        offset: usize,
    },
    /// The escapes decode to a byte sequence that is not valid UTF-8
    InvalidUtf8 {
        /// Start of the segment being decoded
        offset: usize,
    },
}

impl DecodeError {
    /// Byte offset in the request path this error refers to
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::MalformedEscape { offset } | DecodeError::InvalidUtf8 { offset } => *offset,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedEscape { offset } => {
                write!(
                    f,
                    "path decode error: malformed percent escape at offset {}. \
                    Expected '%' followed by two hexadecimal digits.",
                    offset
                )
            }
            DecodeError::InvalidUtf8 { offset } => {
                write!(
                    f,
                    "path decode error: segment starting at offset {} does not decode to valid UTF-8",
                    offset
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Matcher construction error
///
/// Returned by the `Matcher` constructors when the registration layer asks
/// for a node that could never match anything meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Static matcher with an empty literal
    EmptyLiteral,
    /// Wild or catch-all matcher with an empty parameter identifier
    EmptyParameter,
    /// Linear matcher without any children
    EmptyLinear,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyLiteral => {
                write!(f, "matcher build error: static matcher literal must not be empty")
            }
            BuildError::EmptyParameter => {
                write!(
                    f,
                    "matcher build error: parameter identifier must not be empty"
                )
            }
            BuildError::EmptyLinear => {
                write!(
                    f,
                    "matcher build error: linear matcher needs at least one child"
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}
