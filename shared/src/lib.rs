use serde::{Deserialize, Serialize};

pub mod error;
pub mod ranking;
pub mod scoring;

pub use error::QuizError;
pub use ranking::rank_of;
pub use scoring::{points_per_question, score_selections, Scorecard, Scorer, Selection};

pub const MAX_SCORE: u32 = 100;
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub score: u32,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            score: 0,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    /// Checks the record before it is allowed into a store.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.id.trim().is_empty() {
            return Err(QuizError::InvalidInput("player id must not be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(QuizError::InvalidInput(
                "player name must not be empty".into(),
            ));
        }
        if self.age == 0 {
            return Err(QuizError::InvalidInput(
                "player age must be a positive number".into(),
            ));
        }
        if self.score > MAX_SCORE {
            return Err(QuizError::InvalidInput(format!(
                "player score must be between 0 and {}",
                MAX_SCORE
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Answer {
    #[serde(rename = "AnswerText")]
    pub text: String,
    #[serde(rename = "Valid", default)]
    pub correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "QuestionText")]
    pub prompt: String,
    #[serde(rename = "Answers")]
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    /// Looks up an answer by its one-based option number.
    pub fn answer(&self, selection: usize) -> Option<&Answer> {
        selection
            .checked_sub(1)
            .and_then(|index| self.answers.get(index))
    }

    /// A question is only scoreable with exactly one correct answer.
    pub fn validate(&self) -> Result<(), QuizError> {
        let correct = self.answers.iter().filter(|a| a.correct).count();
        if correct != 1 {
            return Err(QuizError::InvalidInput(format!(
                "question '{}' has {} correct answers, expected exactly one",
                self.prompt, correct
            )));
        }
        Ok(())
    }
}

/// Controls what a question feed reveals about the correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    /// Answers carry their correctness flag.
    #[default]
    Full,
    /// Only prompts and option texts.
    PromptsOnly,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AnswerView {
    #[serde(rename = "AnswerText")]
    pub text: String,
    #[serde(rename = "Valid", skip_serializing_if = "Option::is_none", default)]
    pub correct: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QuestionView {
    #[serde(rename = "QuestionText")]
    pub prompt: String,
    #[serde(rename = "Answers")]
    pub answers: Vec<AnswerView>,
}

impl Disclosure {
    pub fn apply(self, questions: &[Question]) -> Vec<QuestionView> {
        questions
            .iter()
            .map(|q| QuestionView {
                prompt: q.prompt.clone(),
                answers: q
                    .answers
                    .iter()
                    .map(|a| AnswerView {
                        text: a.text.clone(),
                        correct: match self {
                            Disclosure::Full => Some(a.correct),
                            Disclosure::PromptsOnly => None,
                        },
                    })
                    .collect(),
            })
            .collect()
    }
}
