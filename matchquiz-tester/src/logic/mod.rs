pub mod play;
pub mod reports;
pub mod sweep;
pub mod validate;

use anyhow::{Context, Result};
use matchquiz_core::{DataLoader, FileLoader, QuizDocument};
use serde::Serialize;
use std::path::Path;

pub use play::{PlayOutcome, play_path};
pub use sweep::{SweepConfig, SweepReport, SweepStrategy, run_sweep};
pub use validate::{ValidationSummary, summarize};

/// Outcome of one tester invocation, whatever the mode.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Report {
    Validate(ValidationSummary),
    Play(PlayOutcome),
    Sweep(SweepReport),
}

impl Report {
    #[must_use]
    pub fn passed(&self) -> bool {
        match self {
            Self::Validate(summary) => summary.passed(),
            Self::Play(outcome) => outcome.passed(),
            Self::Sweep(report) => report.passed(),
        }
    }
}

/// Load and validate a quiz document from disk.
pub fn load_document(path: &Path) -> Result<QuizDocument> {
    FileLoader::new(path)
        .load_document()
        .with_context(|| format!("failed to load quiz document {}", path.display()))
}
