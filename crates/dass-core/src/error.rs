use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("expected {expected} responses, got {actual}")]
    IncompleteResponses { expected: usize, actual: usize },

    #[error("response {value} for item {item} is not one of 0, 1, 2, 3")]
    InvalidResponse { item: usize, value: u8 },

    #[error("could not parse response '{0}'")]
    Parse(String),

    #[error("all {0} items have already been answered")]
    SessionComplete(usize),
}
