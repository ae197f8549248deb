use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Signals that a requested binding contradicts one already recorded.
///
/// This is the expected outcome of exploring a dead-end branch, not a fault:
/// the constraint layer catches it and discards the branch. It never escapes
/// branch evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value is already associated with a different partner in that category")]
pub struct AlreadyAssociated;

/// Configuration and programmer errors. Unlike [`AlreadyAssociated`], these
/// indicate invalid input and fail the whole solve.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("a puzzle needs at least two categories, got {0}")]
    TooFewCategories(usize),
    #[error("category `{category}` has {actual} values, expected {expected}")]
    CardinalityMismatch {
        category: String,
        actual: usize,
        expected: usize,
    },
    #[error("category `{0}` has no values")]
    EmptyCategory(String),
    #[error("duplicate category `{0}`")]
    DuplicateCategory(String),
    #[error("duplicate value `{value}` in category `{category}`")]
    DuplicateValue { category: String, value: String },
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown value `{value}` in category `{category}`")]
    UnknownValue { category: String, value: String },
    #[error("category id {0} is out of range for the registry")]
    CategoryOutOfRange(usize),
    #[error("value reference {category}:{value} is out of range for the registry")]
    ValueRefOutOfRange { category: usize, value: usize },
    #[error("malformed puzzle definition: {0}")]
    MalformedDefinition(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PuzzleError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<PuzzleError> for Error {
    fn from(inner: PuzzleError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
