//! Quiz document model: questions, options and the destination catalog.
use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DataLoadError, UnknownDestinationError, ValidationError};

static DESTINATION_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("destination key pattern is valid"));

/// Per-option score increments keyed by destination, in document order.
pub type ScoreMap = IndexMap<String, i32>;

/// How a question expects to be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Exactly one option is chosen
    #[default]
    #[serde(alias = "single", alias = "radio")]
    SingleChoice,
    /// Any tag this engine does not know; answered as single choice
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub score: ScoreMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type", default)]
    pub kind: ResponseKind,
    pub options: Vec<QuizOption>,
}

impl Question {
    #[must_use]
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Quiz {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

/// A destination the quiz can resolve to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub name: String,
    pub tagline: String,
    pub average_days: f64,
    pub psychology_insight: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub hidden_benefit: String,
    pub target_age: String,
    pub affiliate_url: String,
    pub color: String,
}

/// Destination records keyed by their short identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Catalog(IndexMap<String, SiteRecord>);

impl Catalog {
    #[must_use]
    pub fn new(sites: IndexMap<String, SiteRecord>) -> Self {
        Self(sites)
    }

    /// Look up an untrusted destination key.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDestinationError`] when the key is not in the catalog.
    pub fn resolve(&self, key: &str) -> Result<&SiteRecord, UnknownDestinationError> {
        self.0
            .get(key)
            .ok_or_else(|| UnknownDestinationError(key.to_string()))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A score key that points at a destination missing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogGap {
    pub question_id: u32,
    pub option_id: String,
    pub key: String,
}

/// The whole static document fetched by both the quiz and result screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub quiz: Quiz,
    pub sites: Catalog,
}

impl QuizDocument {
    /// Parse and validate a quiz document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the document shape or fails
    /// [`QuizDocument::validate`].
    pub fn from_json(json: &str) -> Result<Self, DataLoadError> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        for gap in doc.catalog_gaps() {
            log::warn!(
                "question {} option '{}' scores unknown destination '{}'",
                gap.question_id,
                gap.option_id,
                gap.key
            );
        }
        Ok(doc)
    }

    /// Shape checks beyond what deserialization enforces.
    ///
    /// # Errors
    ///
    /// Returns the first authoring mistake found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quiz.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }
        if self.sites.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }
        let mut question_ids = HashSet::new();
        for question in &self.quiz.questions {
            if !question_ids.insert(question.id) {
                return Err(ValidationError::DuplicateQuestion {
                    question_id: question.id,
                });
            }
            if question.options.is_empty() {
                return Err(ValidationError::EmptyOptions {
                    question_id: question.id,
                });
            }
            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(ValidationError::DuplicateOption {
                        question_id: question.id,
                        option_id: option.id.clone(),
                    });
                }
            }
        }
        if let Some(bad) = self.sites.keys().find(|key| !is_destination_key(key)) {
            return Err(ValidationError::MalformedKey(bad.to_string()));
        }
        Ok(())
    }

    /// Score keys that reference destinations absent from the catalog.
    #[must_use]
    pub fn catalog_gaps(&self) -> Vec<CatalogGap> {
        self.quiz
            .questions
            .iter()
            .flat_map(|question| {
                question.options.iter().flat_map(move |option| {
                    option
                        .score
                        .keys()
                        .filter(|key| !self.sites.contains(key))
                        .map(move |key| CatalogGap {
                            question_id: question.id,
                            option_id: option.id.clone(),
                            key: key.clone(),
                        })
                })
            })
            .collect()
    }
}

/// Destination keys travel in a URL query, so they are restricted to URL-safe characters.
#[must_use]
pub fn is_destination_key(key: &str) -> bool {
    DESTINATION_KEY.is_match(key)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn document_from_json_keeps_score_order() {
        let json = r##"{
            "quiz": {
                "title": "診断",
                "description": "desc",
                "questions": [
                    {
                        "id": 1,
                        "question": "Q1",
                        "type": "single",
                        "options": [
                            { "id": "a", "text": "A", "score": { "zeta": 2, "alpha": 1 } }
                        ]
                    }
                ]
            },
            "sites": {
                "zeta": {
                    "name": "Zeta", "tagline": "t", "averageDays": 21,
                    "psychologyInsight": "p", "features": ["f"],
                    "hiddenBenefit": "h", "targetAge": "30代",
                    "affiliateUrl": "https://example.com/z", "color": "#fff"
                },
                "alpha": {
                    "name": "Alpha", "tagline": "t", "averageDays": 14.5,
                    "psychologyInsight": "p", "features": [],
                    "hiddenBenefit": "h", "targetAge": "20代",
                    "affiliateUrl": "https://example.com/a", "color": "#000"
                }
            }
        }"##;

        let doc = QuizDocument::from_json(json).unwrap();
        let question = &doc.quiz.questions[0];
        assert_eq!(question.kind, ResponseKind::SingleChoice);
        let keys: Vec<&str> = question.options[0].score.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        let catalog: Vec<&str> = doc.sites.keys().collect();
        assert_eq!(catalog, ["zeta", "alpha"]);
        assert!((doc.sites.resolve("alpha").unwrap().average_days - 14.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_response_kind_is_tolerated() {
        let json = r#"{ "id": 4, "question": "Q", "type": "slider", "options": [] }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, ResponseKind::Other);
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = QuizDocument::from_json(r#"{ "quiz": { "questions": 3 } }"#).unwrap_err();
        assert!(matches!(err, DataLoadError::Parse(_)));
    }

    #[test]
    fn validation_rejects_empty_options() {
        let doc = document(vec![question(7, Vec::new())], &["siteX"]);
        assert_eq!(
            doc.validate(),
            Err(ValidationError::EmptyOptions { question_id: 7 })
        );
    }

    #[test]
    fn validation_rejects_duplicates() {
        let doc = document(
            vec![
                question(1, vec![option("a", &[])]),
                question(1, vec![option("a", &[])]),
            ],
            &["siteX"],
        );
        assert_eq!(
            doc.validate(),
            Err(ValidationError::DuplicateQuestion { question_id: 1 })
        );

        let doc = document(
            vec![question(2, vec![option("a", &[]), option("a", &[])])],
            &["siteX"],
        );
        assert_eq!(
            doc.validate(),
            Err(ValidationError::DuplicateOption {
                question_id: 2,
                option_id: String::from("a"),
            })
        );
    }

    #[test]
    fn validation_rejects_empty_quiz_and_catalog() {
        assert_eq!(
            document(Vec::new(), &["siteX"]).validate(),
            Err(ValidationError::NoQuestions)
        );
        assert_eq!(
            document(vec![question(1, vec![option("a", &[])])], &[]).validate(),
            Err(ValidationError::EmptyCatalog)
        );
    }

    #[test]
    fn validation_rejects_keys_that_are_not_url_safe() {
        let doc = document(vec![question(1, vec![option("a", &[])])], &["bad key&x=1"]);
        assert_eq!(
            doc.validate(),
            Err(ValidationError::MalformedKey(String::from("bad key&x=1")))
        );
    }

    #[test]
    fn destination_keys_are_url_safe_identifiers() {
        for key in ["pcmax", "you_bride", "site-2", "X"] {
            assert!(is_destination_key(key), "{key}");
        }
        for key in ["", "bad key", "a&b", "a=b", "サイト", "a/b"] {
            assert!(!is_destination_key(key), "{key}");
        }
    }

    #[test]
    fn catalog_gaps_report_unknown_score_keys() {
        let doc = document(
            vec![question(
                3,
                vec![option("a", &[("siteX", 1), ("ghost", 2)])],
            )],
            &["siteX"],
        );
        assert!(doc.validate().is_ok());
        assert_eq!(
            doc.catalog_gaps(),
            vec![CatalogGap {
                question_id: 3,
                option_id: String::from("a"),
                key: String::from("ghost"),
            }]
        );
    }

    #[test]
    fn catalog_resolve_reports_unknown_keys() {
        let doc = two_question_document();
        assert_eq!(doc.sites.resolve("siteY").unwrap().name, "siteY");
        assert_eq!(
            doc.sites.resolve("doesnotexist").unwrap_err(),
            UnknownDestinationError(String::from("doesnotexist"))
        );
    }
}
