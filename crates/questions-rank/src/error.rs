use thiserror::Error;

/// Malformed input to one of the ranking functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("invalid input: cannot compute idf over an empty document set")]
    EmptyDocuments,

    #[error("invalid input: result count must be positive, got {0}")]
    NonPositiveCount(usize),
}

pub(crate) fn check_count(n: usize) -> Result<(), RankError> {
    if n == 0 {
        return Err(RankError::NonPositiveCount(n));
    }
    Ok(())
}
