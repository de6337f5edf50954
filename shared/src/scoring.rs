//! Quiz scoring.
//!
//! Every question is worth `100 / Q` points using integer division, so a
//! quiz whose length does not divide 100 tops out below the maximum
//! (three questions give 99, seven give 98). The truncation happens per
//! question and the total is never rounded up afterwards.

use crate::{Answer, Question, QuizError, MAX_SCORE};

/// Points earned by one correct answer in a quiz of `question_count` questions.
///
/// Returns 0 for an empty quiz.
pub fn points_per_question(question_count: usize) -> u32 {
    if question_count == 0 {
        return 0;
    }
    MAX_SCORE / question_count as u32
}

/// One answered question, kept for the end-of-quiz summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based position of the question in the quiz.
    pub question: usize,
    pub answer: Answer,
}

/// Final result of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub score: u32,
    pub submission: Vec<Selection>,
}

/// Walks a quiz question by question and accumulates the score.
///
/// A selection that is out of range is rejected and the scorer stays on the
/// same question, so the caller can simply ask again.
#[derive(Debug)]
pub struct Scorer<'a> {
    questions: &'a [Question],
    points: u32,
    score: u32,
    submission: Vec<Selection>,
}

impl<'a> Scorer<'a> {
    pub fn new(questions: &'a [Question]) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidInput(
                "a quiz needs at least one question".into(),
            ));
        }

        Ok(Self {
            questions,
            points: points_per_question(questions.len()),
            score: 0,
            submission: Vec::with_capacity(questions.len()),
        })
    }

    /// Zero-based index of the question waiting for an answer.
    pub fn position(&self) -> usize {
        self.submission.len()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The question waiting for an answer, or `None` once the quiz is done.
    pub fn current(&self) -> Option<&'a Question> {
        self.questions.get(self.position())
    }

    pub fn is_complete(&self) -> bool {
        self.position() == self.questions.len()
    }

    /// Running score so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Range-checks a one-based selection against the current question.
    pub fn validate(&self, selection: usize) -> Result<&'a Answer, QuizError> {
        let question = self.current().ok_or_else(|| {
            QuizError::InvalidInput("every question has already been answered".into())
        })?;

        question
            .answer(selection)
            .ok_or(QuizError::SelectionOutOfRange {
                question: self.position() + 1,
                selection,
                available: question.answers.len(),
            })
    }

    /// Records the answer for the current question and moves to the next one.
    pub fn answer(&mut self, selection: usize) -> Result<&'a Answer, QuizError> {
        let answer = self.validate(selection)?;
        let question = self.position();

        if answer.correct {
            self.score += self.points;
        }
        self.submission.push(Selection {
            question,
            answer: answer.clone(),
        });

        Ok(answer)
    }

    pub fn finish(self) -> Result<Scorecard, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::InvalidInput(format!(
                "quiz finished after {} of {} questions",
                self.position(),
                self.total()
            )));
        }

        Ok(Scorecard {
            score: self.score,
            submission: self.submission,
        })
    }
}

/// Scores a full set of one-based selections, one per question in order.
pub fn score_selections(questions: &[Question], selections: &[usize]) -> Result<u32, QuizError> {
    if selections.len() != questions.len() {
        return Err(QuizError::InvalidInput(format!(
            "expected {} selections, got {}",
            questions.len(),
            selections.len()
        )));
    }

    let mut scorer = Scorer::new(questions)?;
    for &selection in selections {
        scorer.answer(selection)?;
    }
    Ok(scorer.finish()?.score)
}
