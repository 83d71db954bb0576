//! Quiz session state machine: loading, answering, completed.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::{Question, Quiz};
use crate::error::SessionError;
use crate::scoring::{AggregateScores, tally};

/// Chosen option per question id. One entry per answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnswerSet(BTreeMap<u32, String>);

impl AnswerSet {
    /// Record or overwrite the answer for a question.
    pub fn record(&mut self, question_id: u32, option_id: &str) {
        self.0.insert(question_id, option_id.to_string());
    }

    #[must_use]
    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.0.get(&question_id).map(String::as_str)
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    #[default]
    Loading,
    InProgress {
        index: usize,
        answers: AnswerSet,
    },
    Completed {
        winner: String,
    },
}

/// What the screen driving the session should do after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Stay,
    /// The active question changed.
    Moved { index: usize },
    /// Back was pressed on the first question; leave the quiz.
    Exit,
    /// The last question was answered; only the winning key survives.
    Completed { winner: String },
}

/// Position within the quiz, for the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index of the active question.
    pub index: usize,
    pub total: usize,
    /// `(index + 1) / total` as a rounded percentage.
    pub percent: u8,
}

impl Progress {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

/// Restorable session. Deserialization goes through [`QuizSession::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "SessionSnapshot")]
pub struct QuizSession {
    quiz: Option<Quiz>,
    phase: SessionPhase,
    selected: Option<String>,
}

/// Unchecked wire form of a [`QuizSession`].
#[derive(Deserialize)]
struct SessionSnapshot {
    quiz: Option<Quiz>,
    phase: SessionPhase,
    selected: Option<String>,
}

impl TryFrom<SessionSnapshot> for QuizSession {
    type Error = SessionError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        let session = Self {
            quiz: snapshot.quiz,
            phase: snapshot.phase,
            selected: snapshot.selected,
        };
        session.validate()?;
        Ok(session)
    }
}

impl QuizSession {
    /// A session waiting for its quiz data.
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    /// A session already holding its data, positioned on the first question.
    #[must_use]
    pub fn start(quiz: Quiz) -> Self {
        let mut session = Self::loading();
        session.resolve(quiz);
        session
    }

    /// Data arrived; move from `Loading` to the first question.
    ///
    /// Ignored once the session has left `Loading`.
    pub fn resolve(&mut self, quiz: Quiz) {
        if self.phase != SessionPhase::Loading {
            return;
        }
        log::debug!("quiz resolved with {} questions", quiz.questions.len());
        self.quiz = Some(quiz);
        self.phase = SessionPhase::InProgress {
            index: 0,
            answers: AnswerSet::default(),
        };
        self.selected = None;
    }

    /// Check that the phase agrees with the quiz it points into.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Inconsistent`] when an in-progress session has no
    /// quiz, its index is past the last question, a recorded answer or the
    /// highlighted option is not offered by its question, or a loading session
    /// already carries a selection.
    pub fn validate(&self) -> Result<(), SessionError> {
        match (&self.phase, &self.quiz) {
            (SessionPhase::Loading, _) => {
                if self.selected.is_some() {
                    return Err(SessionError::Inconsistent(String::from(
                        "selection without an active question",
                    )));
                }
            }
            (SessionPhase::InProgress { .. }, None) => {
                return Err(SessionError::Inconsistent(String::from(
                    "in progress without quiz data",
                )));
            }
            (SessionPhase::InProgress { index, answers }, Some(quiz)) => {
                let Some(question) = quiz.questions.get(*index) else {
                    return Err(SessionError::Inconsistent(format!(
                        "question index {index} out of range for {} questions",
                        quiz.questions.len()
                    )));
                };
                if let Some(selected) = self.selected.as_deref()
                    && question.option(selected).is_none()
                {
                    return Err(SessionError::Inconsistent(format!(
                        "option '{selected}' is not offered by question {}",
                        question.id
                    )));
                }
                tally(quiz, answers)
                    .map_err(|err| SessionError::Inconsistent(err.to_string()))?;
            }
            (SessionPhase::Completed { .. }, _) => {}
        }
        Ok(())
    }

    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    /// The option highlighted for the active question, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match (&self.phase, &self.quiz) {
            (SessionPhase::InProgress { index, .. }, Some(quiz)) => quiz.questions.get(*index),
            _ => None,
        }
    }

    #[must_use]
    pub fn answers(&self) -> Option<&AnswerSet> {
        match &self.phase {
            SessionPhase::InProgress { answers, .. } => Some(answers),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        let (SessionPhase::InProgress { index, .. }, Some(quiz)) = (&self.phase, &self.quiz)
        else {
            return None;
        };
        let total = quiz.questions.len();
        if *index >= total {
            return None;
        }
        let percent = ((*index + 1) * 100 + total / 2) / total;
        Some(Progress {
            index: *index,
            total,
            percent: u8::try_from(percent.min(100)).unwrap_or(100),
        })
    }

    /// Highlight an option of the active question without advancing.
    ///
    /// # Errors
    ///
    /// Fails when no question is active or the id is not one of its options.
    pub fn select_option(&mut self, option_id: &str) -> Result<(), SessionError> {
        let question = match &self.phase {
            SessionPhase::Loading => return Err(SessionError::NotStarted),
            SessionPhase::Completed { .. } => return Err(SessionError::AlreadyCompleted),
            SessionPhase::InProgress { .. } => self
                .current_question()
                .ok_or(SessionError::NotStarted)?,
        };
        if question.option(option_id).is_none() {
            return Err(SessionError::UnknownOption(option_id.to_string()));
        }
        self.selected = Some(option_id.to_string());
        Ok(())
    }

    /// Commit the highlighted option and move forward, finalizing on the last question.
    ///
    /// Without a highlighted option this is a no-op returning [`Transition::Stay`].
    ///
    /// # Errors
    ///
    /// Propagates scoring failures from [`QuizSession::finalize`].
    pub fn advance(&mut self) -> Result<Transition, SessionError> {
        let Some(selected) = self.selected.clone() else {
            return Ok(Transition::Stay);
        };
        let Some(quiz) = self.quiz.as_ref() else {
            return Ok(Transition::Stay);
        };
        let SessionPhase::InProgress { index, answers } = &mut self.phase else {
            return Ok(Transition::Stay);
        };
        let Some(question) = quiz.questions.get(*index) else {
            return Ok(Transition::Stay);
        };
        answers.record(question.id, &selected);

        if *index + 1 >= quiz.questions.len() {
            return self.finalize();
        }

        *index += 1;
        let next = *index;
        self.selected = answers.get(quiz.questions[next].id).map(str::to_string);
        log::debug!("advanced to question index {next}");
        Ok(Transition::Moved { index: next })
    }

    /// Step back one question, or ask to leave the quiz from the first one.
    pub fn retreat(&mut self) -> Transition {
        let Some(quiz) = self.quiz.as_ref() else {
            return Transition::Stay;
        };
        let SessionPhase::InProgress { index, answers } = &mut self.phase else {
            return Transition::Stay;
        };
        if *index == 0 {
            log::debug!("retreat from first question, leaving quiz");
            return Transition::Exit;
        }
        let prev = *index - 1;
        let Some(question) = quiz.questions.get(prev) else {
            return Transition::Stay;
        };
        *index = prev;
        self.selected = answers.get(question.id).map(str::to_string);
        Transition::Moved { index: prev }
    }

    /// Aggregate every recorded answer and complete with the winning destination.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Scoring`] with `EmptyAggregate` when no answer
    /// contributed any score, and [`SessionError::NotStarted`] before data loads.
    pub fn finalize(&mut self) -> Result<Transition, SessionError> {
        let aggregate = self.aggregate()?;
        let winner = aggregate.winner()?.to_string();
        log::debug!("quiz completed, winner '{winner}'");
        self.phase = SessionPhase::Completed {
            winner: winner.clone(),
        };
        self.selected = None;
        Ok(Transition::Completed { winner })
    }

    /// Current aggregate of recorded answers, recomputed from scratch.
    ///
    /// # Errors
    ///
    /// Fails before data loads, after completion, or on an answer naming an unknown option.
    pub fn aggregate(&self) -> Result<AggregateScores, SessionError> {
        match (&self.phase, &self.quiz) {
            (SessionPhase::InProgress { answers, .. }, Some(quiz)) => Ok(tally(quiz, answers)?),
            (SessionPhase::Completed { .. }, _) => Err(SessionError::AlreadyCompleted),
            _ => Err(SessionError::NotStarted),
        }
    }
}
