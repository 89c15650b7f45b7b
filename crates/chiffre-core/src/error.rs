#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Hardening limit, the multiplier scan is not meant for documents
    #[error("Input too long: {len} characters (max {max})")]
    InputTooLong { len: usize, max: usize },
}
