use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Frontier exhausted without reaching the goal")]
    FrontierExhausted,
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
