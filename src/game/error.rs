use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// One or both player names were empty (or whitespace only).
    #[error("Please enter names for both players")]
    InvalidInput,
}
