use thiserror::Error;

/// Rejected user input. The ledger is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Fill in both category and amount correctly: category is empty")]
    EmptyCategory,
    #[error("Fill in both category and amount correctly: '{0}' is not a number")]
    InvalidAmount(String),
    #[error("Fill in both category and amount correctly: '{0}' is out of range")]
    AmountOutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No entry at position {index} (ledger has {len})")]
pub(crate) struct IndexError {
    pub(crate) index: usize,
    pub(crate) len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Index(#[from] IndexError),
}
