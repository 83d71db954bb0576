use matchquiz_core::{AnswerSet, QuizDocument, QuizOption, ResultState, present, tally};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;

use super::validate::answer_paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SweepStrategy {
    /// Every answer path, in mixed-radix order.
    Exhaustive,
    /// Uniformly sampled paths from a seeded generator.
    Sampled { samples: usize, seed: u64 },
}

#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Largest answer space still walked exhaustively.
    pub limit: u128,
    pub samples: usize,
    pub seed: u64,
    /// Echo every path and its winner to stderr.
    pub verbose: bool,
}

impl SweepConfig {
    #[must_use]
    pub const fn strategy_for(&self, total_paths: u128) -> SweepStrategy {
        if total_paths <= self.limit {
            SweepStrategy::Exhaustive
        } else {
            SweepStrategy::Sampled {
                samples: self.samples,
                seed: self.seed,
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub strategy: SweepStrategy,
    pub total_paths: u128,
    pub paths_checked: usize,
    /// Winning destination counts, keyed by destination.
    pub winners: BTreeMap<String, usize>,
    /// Catalog entries no checked path led to, in catalog order.
    pub never_won: Vec<String>,
    pub failures: Vec<String>,
}

impl SweepReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Score answer paths and check that each one resolves to a catalog record.
///
/// Each path must produce a winner that holds the maximum aggregate score and
/// that the result presenter finds in the catalog.
#[must_use]
pub fn run_sweep(document: &QuizDocument, config: &SweepConfig) -> SweepReport {
    let radices: Vec<usize> = document
        .quiz
        .questions
        .iter()
        .map(|question| question.options.len())
        .collect();
    let total_paths = answer_paths(document);
    let strategy = config.strategy_for(total_paths);
    log::info!("sweeping {total_paths} answer paths with {strategy:?}");

    let paths: Box<dyn Iterator<Item = Vec<usize>>> = match strategy {
        SweepStrategy::Exhaustive => Box::new(exhaustive_paths(radices, total_paths)),
        SweepStrategy::Sampled { samples, seed } => {
            Box::new(sampled_paths(radices, samples, seed))
        }
    };

    let mut report = SweepReport {
        strategy,
        total_paths,
        paths_checked: 0,
        winners: BTreeMap::new(),
        never_won: Vec::new(),
        failures: Vec::new(),
    };

    for digits in paths {
        report.paths_checked += 1;
        let options = select_options(document, &digits);
        let label = options
            .iter()
            .map(|option| option.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        match check_path(document, &options) {
            Ok(winner) => {
                if config.verbose {
                    eprintln!("{label} -> {winner}");
                }
                *report.winners.entry(winner).or_default() += 1;
            }
            Err(failure) => report.failures.push(format!("[{label}] {failure}")),
        }
    }

    report.never_won = document
        .sites
        .keys()
        .filter(|key| !report.winners.contains_key(*key))
        .map(str::to_string)
        .collect();
    report
}

fn select_options<'a>(document: &'a QuizDocument, digits: &[usize]) -> Vec<&'a QuizOption> {
    document
        .quiz
        .questions
        .iter()
        .zip(digits)
        .map(|(question, &digit)| &question.options[digit])
        .collect()
}

fn check_path(document: &QuizDocument, options: &[&QuizOption]) -> Result<String, String> {
    let mut answers = AnswerSet::default();
    for (question, option) in document.quiz.questions.iter().zip(options) {
        answers.record(question.id, &option.id);
    }
    let scores = tally(&document.quiz, &answers).map_err(|err| err.to_string())?;
    let winner = scores.winner().map_err(|err| err.to_string())?;

    let best = scores.iter().map(|(_, score)| score).max().unwrap_or_default();
    if scores.get(winner) != Some(best) {
        return Err(format!("winner '{winner}' does not hold the top score {best}"));
    }

    match present(Some(document), Some(winner)) {
        ResultState::Found { .. } => Ok(winner.to_string()),
        other => Err(format!("winner '{winner}' resolved to {other:?}")),
    }
}

/// Every path, least significant digit on the last question.
fn exhaustive_paths(radices: Vec<usize>, total: u128) -> impl Iterator<Item = Vec<usize>> {
    (0..total).map(move |mut n| {
        let mut digits = vec![0; radices.len()];
        for (slot, &radix) in digits.iter_mut().zip(&radices).rev() {
            let radix = radix as u128;
            *slot = usize::try_from(n % radix).unwrap_or_default();
            n /= radix;
        }
        digits
    })
}

fn sampled_paths(radices: Vec<usize>, samples: usize, seed: u64) -> impl Iterator<Item = Vec<usize>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..samples).map(move |_| {
        radices
            .iter()
            .map(|&radix| rng.gen_range(0..radix))
            .collect()
    })
}
