//! Matchquiz Engine
//!
//! Platform-agnostic core logic for the Matchquiz destination quiz.
//! This crate provides the data model, scoring and session state machine
//! without UI or platform-specific dependencies.

pub mod data;
pub mod error;
pub mod handoff;
pub mod result;
pub mod scoring;
pub mod session;

use std::path::PathBuf;

// Re-export commonly used types
pub use data::{
    Catalog, CatalogGap, Question, Quiz, QuizDocument, QuizOption, ResponseKind, ScoreMap,
    SiteRecord, is_destination_key,
};
pub use error::{DataLoadError, ScoringError, SessionError, UnknownDestinationError, ValidationError};
pub use handoff::{HandoffQuery, SITE_PARAM};
pub use result::{COMPATIBILITY_PERCENT, ResultState, ResultSummary, present, result_summary};
pub use scoring::{AggregateScores, tally};
pub use session::{AnswerSet, Progress, QuizSession, SessionPhase, Transition};

/// Trait for abstracting where the quiz document comes from.
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the quiz document
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    fn load_document(&self) -> Result<QuizDocument, Self::Error>;
}

/// Loads the document from an in-memory JSON string
#[derive(Debug, Clone, Copy)]
pub struct JsonLoader<'a>(pub &'a str);

impl DataLoader for JsonLoader<'_> {
    type Error = DataLoadError;

    fn load_document(&self) -> Result<QuizDocument, Self::Error> {
        QuizDocument::from_json(self.0)
    }
}

/// Loads the document from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataLoader for FileLoader {
    type Error = DataLoadError;

    fn load_document(&self) -> Result<QuizDocument, Self::Error> {
        let json = std::fs::read_to_string(&self.path)
            .map_err(|err| DataLoadError::Fetch(format!("{}: {err}", self.path.display())))?;
        QuizDocument::from_json(&json)
    }
}

/// Drives quiz sessions and result lookups against one data source.
///
/// Each call loads the document afresh, the same way each screen issues its own fetch.
pub struct QuizEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> QuizEngine<L>
where
    L: DataLoader,
{
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Start a session positioned on the first question.
    ///
    /// # Errors
    ///
    /// Returns an error if the quiz document cannot be loaded.
    pub fn start_session(&self) -> Result<QuizSession, L::Error> {
        let document = self.data_loader.load_document()?;
        Ok(QuizSession::start(document.quiz))
    }

    /// Resolve the result screen for a hand-off key.
    ///
    /// A document that fails to load leaves the screen analyzing; it never errors.
    pub fn present(&self, key: Option<&str>) -> ResultState {
        match self.data_loader.load_document() {
            Ok(document) => present(Some(&document), key),
            Err(err) => {
                log::error!("Failed to load quiz data: {err}");
                ResultState::Analyzing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"{
        "quiz": {
            "title": "t",
            "description": "d",
            "questions": [
                { "id": 1, "question": "Q1", "type": "single", "options": [
                    { "id": "a", "text": "A", "score": { "siteX": 3, "siteY": 1 } }
                ] },
                { "id": 2, "question": "Q2", "type": "single", "options": [
                    { "id": "b", "text": "B", "score": { "siteX": 1, "siteY": 5 } }
                ] }
            ]
        },
        "sites": {
            "siteX": { "name": "X", "tagline": "", "averageDays": 10, "psychologyInsight": "",
                "features": [], "hiddenBenefit": "", "targetAge": "", "affiliateUrl": "https://x", "color": "#111" },
            "siteY": { "name": "Y", "tagline": "", "averageDays": 20, "psychologyInsight": "",
                "features": [], "hiddenBenefit": "", "targetAge": "", "affiliateUrl": "https://y", "color": "#222" }
        }
    }"##;

    #[test]
    fn engine_runs_a_session_to_a_result() {
        let engine = QuizEngine::new(JsonLoader(DOC));
        let mut session = engine.start_session().unwrap();
        session.select_option("a").unwrap();
        session.advance().unwrap();
        session.select_option("b").unwrap();
        let Transition::Completed { winner } = session.advance().unwrap() else {
            panic!("expected completion");
        };
        assert_eq!(winner, "siteY");

        let query = HandoffQuery::parse(&HandoffQuery::for_winner(&winner).to_query_string());
        let state = engine.present(query.site());
        assert_eq!(state.record().map(|r| r.name.as_str()), Some("Y"));
    }

    #[test]
    fn engine_stays_analyzing_when_data_fails() {
        let engine = QuizEngine::new(JsonLoader("{ not json"));
        assert!(engine.start_session().is_err());
        assert_eq!(engine.present(Some("siteX")), ResultState::Analyzing);
    }

    #[test]
    fn file_loader_reports_missing_files() {
        let loader = FileLoader::new("/definitely/not/here/quiz-data.json");
        assert!(matches!(
            loader.load_document(),
            Err(DataLoadError::Fetch(_))
        ));
    }
}
