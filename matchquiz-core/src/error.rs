//! Error types shared across the quiz engine.
use thiserror::Error;

/// The quiz document could not be fetched, parsed, or failed its shape checks.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Fetch failed: {0}")]
    Fetch(String),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid quiz document: {0}")]
    Invalid(#[from] ValidationError),
}

/// Authoring mistakes rejected when a document is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("quiz has no questions")]
    NoQuestions,
    #[error("question {question_id} has no options")]
    EmptyOptions { question_id: u32 },
    #[error("question id {question_id} appears more than once")]
    DuplicateQuestion { question_id: u32 },
    #[error("option '{option_id}' appears more than once in question {question_id}")]
    DuplicateOption { question_id: u32, option_id: String },
    #[error("site catalog is empty")]
    EmptyCatalog,
    #[error("destination key '{0}' is not URL-safe")]
    MalformedKey(String),
}

/// The navigation hand-off named a destination the catalog does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown destination: {0}")]
pub struct UnknownDestinationError(pub String);

/// Failures while folding answers into an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Nothing was answered, so there is no maximum to pick.
    #[error("cannot pick a winner from an empty aggregate")]
    EmptyAggregate,
    #[error("question {question_id} has no option '{option_id}'")]
    UnknownOption { question_id: u32, option_id: String },
}

/// Rejected session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("quiz data has not been loaded yet")]
    NotStarted,
    #[error("quiz is already completed")]
    AlreadyCompleted,
    #[error("option '{0}' is not offered by the current question")]
    UnknownOption(String),
    #[error("inconsistent session state: {0}")]
    Inconsistent(String),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
