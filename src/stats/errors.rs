use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    /// No match records were available for the player
    #[error("{0}")]
    NoData(String),
}

impl StatsError {
    pub fn no_matches() -> Self {
        StatsError::NoData("No matches found".to_string())
    }
}
