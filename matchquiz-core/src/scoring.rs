//! Score aggregation and winner selection.
//!
//! Ties are broken by first appearance: destinations enter the aggregate in the
//! order they are first scored (questions in quiz order, then score-map entries
//! in document order), and the earliest key among those sharing the maximum
//! wins. This matches a stable sort by descending score over that order.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{Quiz, ScoreMap};
use crate::error::ScoringError;
use crate::session::AnswerSet;

/// Cumulative score per destination, in first-scored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AggregateScores(IndexMap<String, i64>);

impl AggregateScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one option's score map into the running totals.
    pub fn add(&mut self, score: &ScoreMap) {
        for (key, points) in score {
            *self.0.entry(key.clone()).or_insert(0) += i64::from(*points);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.0.get(key).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(key, score)| (key.as_str(), *score))
    }

    /// Entries sorted by descending score; ties keep first-scored order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<(&str, i64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The highest-scoring destination under the first-scored tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::EmptyAggregate`] when nothing was scored.
    pub fn winner(&self) -> Result<&str, ScoringError> {
        let mut best: Option<(&str, i64)> = None;
        for (key, score) in self.iter() {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((key, score));
            }
        }
        best.map(|(key, _)| key).ok_or(ScoringError::EmptyAggregate)
    }
}

impl<'a> FromIterator<&'a ScoreMap> for AggregateScores {
    fn from_iter<I: IntoIterator<Item = &'a ScoreMap>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        for score in iter {
            aggregate.add(score);
        }
        aggregate
    }
}

/// Sum the score maps of every answered option, walking questions in quiz order.
///
/// # Errors
///
/// Returns [`ScoringError::UnknownOption`] if an answer names an option its
/// question does not offer.
pub fn tally(quiz: &Quiz, answers: &AnswerSet) -> Result<AggregateScores, ScoringError> {
    let mut aggregate = AggregateScores::new();
    for question in &quiz.questions {
        let Some(option_id) = answers.get(question.id) else {
            continue;
        };
        let option = question
            .option(option_id)
            .ok_or_else(|| ScoringError::UnknownOption {
                question_id: question.id,
                option_id: option_id.to_string(),
            })?;
        aggregate.add(&option.score);
    }
    Ok(aggregate)
}
