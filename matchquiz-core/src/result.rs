//! Result presenter: turns a hand-off key into what the result screen shows.
use serde::{Deserialize, Serialize};

use crate::data::{QuizDocument, SiteRecord};

/// Compatibility figure shown on every result. A fixed display value, not
/// derived from the aggregate scores.
pub const COMPATIBILITY_PERCENT: u8 = 94;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultState {
    /// The quiz document has not resolved yet (or never will).
    Analyzing,
    /// The document resolved but the key is missing from the catalog.
    NotFound { key: Option<String> },
    Found { key: String, record: SiteRecord },
}

impl ResultState {
    #[must_use]
    pub fn record(&self) -> Option<&SiteRecord> {
        match self {
            Self::Found { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Resolve the result screen state from the (possibly pending) document and the hand-off key.
#[must_use]
pub fn present(document: Option<&QuizDocument>, key: Option<&str>) -> ResultState {
    let Some(document) = document else {
        return ResultState::Analyzing;
    };
    let Some(key) = key else {
        log::warn!("result requested without a destination key");
        return ResultState::NotFound { key: None };
    };
    match document.sites.resolve(key) {
        Ok(record) => ResultState::Found {
            key: key.to_string(),
            record: record.clone(),
        },
        Err(err) => {
            log::warn!("{err}");
            ResultState::NotFound {
                key: Some(key.to_string()),
            }
        }
    }
}

/// Display strings derived from a record for the result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub compatibility: String,
    pub average_days: String,
    /// CSS gradient for the accent stripe built from the record's color token.
    pub accent_gradient: String,
}

#[must_use]
pub fn result_summary(record: &SiteRecord) -> ResultSummary {
    ResultSummary {
        compatibility: format!("{COMPATIBILITY_PERCENT}%"),
        average_days: format_days(record.average_days),
        accent_gradient: format!(
            "linear-gradient(to right, {color}, {color}dd)",
            color = record.color
        ),
    }
}

fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{days:.0}")
    } else {
        format!("{days}")
    }
}
