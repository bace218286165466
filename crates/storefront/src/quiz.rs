//! Product-finder quiz.
//!
//! Three questions are asked in order: wellness goal, preferred format and
//! experience level. Only the goal currently drives the recommendation; the
//! other two answers are recorded and carried along unchanged.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use herbal_store_core::Product;
use thiserror::Error;

use crate::catalog::Catalog;

/// Number of questions in the quiz.
pub const QUESTION_COUNT: u8 = 3;

/// Returned when a question number falls outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quiz question must be between 1 and 3, got {0}")]
pub struct QuestionOutOfRange(pub u8);

/// The recorded selections, keyed by question number (1-based).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    answers: BTreeMap<u8, String>,
}

impl QuizAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `question`, replacing any earlier answer.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionOutOfRange`] unless `question` is in `1..=3`.
    pub fn set(
        &mut self,
        question: u8,
        value: impl Into<String>,
    ) -> Result<(), QuestionOutOfRange> {
        if !(1..=QUESTION_COUNT).contains(&question) {
            return Err(QuestionOutOfRange(question));
        }
        self.answers.insert(question, value.into());
        Ok(())
    }

    #[must_use]
    pub fn get(&self, question: u8) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    /// Answer to question 1.
    #[must_use]
    pub fn goal(&self) -> Option<&str> {
        self.get(1)
    }

    /// Answer to question 2.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.get(2)
    }

    /// Answer to question 3.
    #[must_use]
    pub fn experience(&self) -> Option<&str> {
        self.get(3)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// Wellness goals the recommendation rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    Energy,
    Stress,
    Sleep,
    Immunity,
}

impl Goal {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Stress => "stress",
            Self::Sleep => "sleep",
            Self::Immunity => "immunity",
        }
    }

    /// Name fragments searched for, in priority order within one pass.
    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Energy => &["Ginseng"],
            Self::Stress => &["Chamomile", "Lavender"],
            Self::Sleep => &["Chamomile"],
            Self::Immunity => &["Echinacea"],
        }
    }

    /// Zero-based catalog position used when no name matches.
    const fn fallback_index(self) -> usize {
        match self {
            Self::Energy => 2,
            Self::Stress | Self::Sleep => 1,
            Self::Immunity => 4,
        }
    }
}

/// Error for a goal string with no rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quiz goal: {0}")]
pub struct UnknownGoal(pub String);

impl FromStr for Goal {
    type Err = UnknownGoal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energy" => Ok(Self::Energy),
            "stress" => Ok(Self::Stress),
            "sleep" => Ok(Self::Sleep),
            "immunity" => Ok(Self::Immunity),
            other => Err(UnknownGoal(other.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick a product for the quiz answers.
///
/// The goal selects the first product (in load order) whose name contains
/// one of the goal's keywords; failing that, a fixed catalog position; and
/// failing that, the first product. A missing or unknown goal yields the
/// first product. Returns `None` only for an empty catalog.
#[must_use]
pub fn recommend<'a>(catalog: &'a Catalog, answers: &QuizAnswers) -> Option<&'a Product> {
    let products = catalog.products();
    let default = products.first();

    let Some(goal) = answers.goal().and_then(|g| g.parse::<Goal>().ok()) else {
        return default;
    };

    let keywords = goal.keywords();
    products
        .iter()
        .find(|p| keywords.iter().any(|k| p.name.contains(*k)))
        .or_else(|| products.get(goal.fallback_index()))
        .or(default)
}

/// What the quiz shows after an answer is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    /// Show this question next.
    Next(u8),
    /// All questions answered.
    Complete(QuizAnswers),
}

/// Progress through one run of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    current: u8,
    answers: QuizAnswers,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// A session positioned at question 1 with no answers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: 1,
            answers: QuizAnswers::new(),
        }
    }

    /// Begin a fresh run, discarding any previous answers.
    pub fn start(&mut self) {
        *self = Self::new();
    }

    /// Same as [`QuizSession::start`]; used from the result screen.
    pub fn restart(&mut self) {
        self.start();
    }

    /// The question awaiting an answer (1-based).
    #[must_use]
    pub const fn current_question(&self) -> u8 {
        self.current
    }

    #[must_use]
    pub const fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == usize::from(QUESTION_COUNT)
    }

    /// Record `value` for the current question and advance.
    ///
    /// Selecting again after completion overwrites the last answer and
    /// reports completion again.
    pub fn select(&mut self, value: impl Into<String>) -> QuizStep {
        // `current` never leaves 1..=QUESTION_COUNT.
        self.answers.answers.insert(self.current, value.into());

        if self.current < QUESTION_COUNT {
            self.current += 1;
            QuizStep::Next(self.current)
        } else {
            QuizStep::Complete(self.answers.clone())
        }
    }
}
