use thiserror::Error;

/// Canonical result for terminal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a terminal operation can report.
///
/// Capability probes never produce these: an unsupported probe declines with
/// `None` rather than failing. Argument-validity misuse (a chunk size of
/// zero, inconsistent `sequence` bounds) panics at the constructing call
/// instead, before any element is pulled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation that requires at least one element ran on an empty
    /// sequence.
    #[error("sequence contains no elements")]
    Empty,

    /// The sequence had elements, but none satisfied the predicate.
    #[error("no element satisfies the predicate")]
    NoMatch,

    /// `single` found more than one qualifying element.
    #[error("more than one element satisfies the condition")]
    MultipleMatches,

    /// `element_at` was asked for a position past the end.
    #[error("index {index} is out of range for the sequence")]
    OutOfRange { index: usize },

    /// Two elements mapped to the same key while building a map.
    #[error("duplicate key encountered while building a map")]
    DuplicateKey,
}
