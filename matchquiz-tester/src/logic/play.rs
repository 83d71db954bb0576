use anyhow::{Context, Result, bail};
use matchquiz_core::{AnswerSet, HandoffQuery, QuizDocument, QuizSession, Transition, present, tally};
use serde::Serialize;

/// A single scripted walk through the quiz.
#[derive(Debug, Clone, Serialize)]
pub struct PlayOutcome {
    pub answers: Vec<String>,
    pub winner: String,
    pub ranking: Vec<(String, i64)>,
    pub handoff: String,
    /// Display name of the resolved record, `None` when the result screen would show not-found.
    pub site_name: Option<String>,
}

impl PlayOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.site_name.is_some()
    }
}

/// Drive a session with one option id per question, in question order.
pub fn play_path(document: &QuizDocument, answers: &[String]) -> Result<PlayOutcome> {
    let questions = &document.quiz.questions;
    if answers.len() != questions.len() {
        bail!(
            "expected {} answers, got {}",
            questions.len(),
            answers.len()
        );
    }

    let mut session = QuizSession::start(document.quiz.clone());
    let mut recorded = AnswerSet::default();
    let mut transition = Transition::Stay;
    for (question, answer) in questions.iter().zip(answers) {
        session
            .select_option(answer)
            .with_context(|| format!("question {}: option {answer:?}", question.id))?;
        recorded.record(question.id, answer);
        transition = session.advance()?;
        log::debug!("question {} -> {answer}: {transition:?}", question.id);
    }

    let Transition::Completed { winner } = transition else {
        bail!("session did not complete after {} answers", answers.len());
    };

    let ranking = tally(&document.quiz, &recorded)?
        .ranked()
        .into_iter()
        .map(|(key, score)| (key.to_string(), score))
        .collect();
    let handoff = HandoffQuery::for_winner(&winner);
    let site_name = present(Some(document), handoff.site())
        .record()
        .map(|record| record.name.clone());

    Ok(PlayOutcome {
        answers: answers.to_vec(),
        handoff: handoff.to_query_string(),
        winner,
        ranking,
        site_name,
    })
}
