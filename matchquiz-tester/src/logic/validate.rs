use matchquiz_core::{CatalogGap, QuizDocument};
use serde::Serialize;

/// Shape of a quiz document after it passed structural validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub title: String,
    pub questions: usize,
    pub sites: Vec<String>,
    pub answer_paths: u128,
    /// Score keys with no catalog entry. Reaching one yields the not-found screen.
    pub gaps: Vec<CatalogGap>,
}

impl ValidationSummary {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.gaps.is_empty()
    }
}

#[must_use]
pub fn summarize(document: &QuizDocument) -> ValidationSummary {
    ValidationSummary {
        title: document.quiz.title.clone(),
        questions: document.quiz.questions.len(),
        sites: document.sites.keys().map(str::to_string).collect(),
        answer_paths: answer_paths(document),
        gaps: document.catalog_gaps(),
    }
}

/// Number of distinct complete answer paths through the quiz.
#[must_use]
pub fn answer_paths(document: &QuizDocument) -> u128 {
    document
        .quiz
        .questions
        .iter()
        .map(|question| question.options.len() as u128)
        .fold(1, u128::saturating_mul)
}
