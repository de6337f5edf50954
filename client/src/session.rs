//! One quiz run from identification to the final report
//!
//! A session moves through
//! `Unidentified → Identified | Registered → Answering → Scored → Ranked → Reported`
//! and never goes back. Invalid replies (an empty id, a non-numeric age, an
//! answer number outside the options) are reported to the user and asked
//! again without leaving the current state. Any error from the backend ends
//! the session.

use crate::console::{parse_age, parse_selection, Console, Prompt};
use crate::error::ClientError;
use crate::network::QuizBackend;
use crate::rendering;
use log::{debug, info};
use shared::{Player, Question, Scorecard, Scorer, Selection};

/// Where a session currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unidentified,
    /// An existing player was found under the given id
    Identified(Player),
    /// A new player was registered
    Registered(Player),
    /// Waiting for the answer to the question at `index` (zero-based)
    Answering { player: Player, index: usize },
    Scored { player: Player, score: u32 },
    Ranked { player: Player, rank: usize },
    Reported,
}

/// Outcome of a finished quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    /// The player record as stored after the update
    pub player: Player,
    pub score: u32,
    pub rank: usize,
    /// True when the player existed before this session
    pub returning: bool,
    pub submission: Vec<Selection>,
}

pub struct QuizSession<'a, B, C> {
    backend: &'a B,
    console: &'a mut C,
    state: SessionState,
}

impl<'a, B: QuizBackend, C: Console> QuizSession<'a, B, C> {
    pub fn new(backend: &'a B, console: &'a mut C) -> Self {
        Self {
            backend,
            console,
            state: SessionState::Unidentified,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn transition(&mut self, state: SessionState) {
        debug!("Session state: {:?}", state);
        self.state = state;
    }

    /// Runs the whole quiz and returns the final report
    pub async fn run(&mut self) -> Result<QuizReport, ClientError> {
        let (player, returning) = self.identify().await?;

        self.console.say("Good luck on your Quiz!")?;
        let questions = self.backend.questions().await?;
        let card = self.answer_questions(&player, &questions)?;
        self.transition(SessionState::Scored {
            player: player.clone(),
            score: card.score,
        });

        let stored = self
            .backend
            .update_player(&player.with_score(card.score))
            .await?;
        let rank = self.backend.rank(&stored.id).await?;
        self.transition(SessionState::Ranked {
            player: stored.clone(),
            rank,
        });
        info!("Player {} scored {} (rank {})", stored.id, card.score, rank);

        let report = QuizReport {
            player: stored,
            score: card.score,
            rank,
            returning,
            submission: card.submission,
        };
        self.console.say("End of Quiz.")?;
        self.console.say(rendering::report(&report).trim_end())?;
        self.transition(SessionState::Reported);

        Ok(report)
    }

    /// Finds the player behind the entered id, registering them if needed
    async fn identify(&mut self) -> Result<(Player, bool), ClientError> {
        let id = loop {
            let reply = self.console.ask(&Prompt::Identifier)?;
            let id = reply.trim();
            if id.is_empty() || id.contains('/') {
                self.console.say("That ID is not valid. Try again.")?;
                continue;
            }
            break id.to_string();
        };

        if let Some(player) = self.backend.find_player(&id).await? {
            self.console.say(&format!("Welcome back {}.", player.name))?;
            self.transition(SessionState::Identified(player.clone()));
            return Ok((player, true));
        }

        let name = loop {
            let reply = self.console.ask(&Prompt::Name)?;
            if reply.trim().is_empty() {
                self.console.say("Your name cannot be empty.")?;
                continue;
            }
            break reply.trim().to_string();
        };

        let age = loop {
            match parse_age(&self.console.ask(&Prompt::Age)?) {
                Ok(age) => break age,
                Err(_) => self.console.say("Your age input was incorrect.")?,
            }
        };

        let player = self
            .backend
            .create_player(&Player::new(id, name, age))
            .await?;
        self.transition(SessionState::Registered(player.clone()));
        Ok((player, false))
    }

    /// Asks every question in order, re-asking until the reply is in range
    fn answer_questions(
        &mut self,
        player: &Player,
        questions: &[Question],
    ) -> Result<Scorecard, ClientError> {
        let mut scorer = Scorer::new(questions)?;
        self.console
            .say("Kindly select one answer for each question.")?;

        while let Some(question) = scorer.current() {
            let index = scorer.position();
            if !matches!(self.state, SessionState::Answering { index: i, .. } if i == index) {
                self.transition(SessionState::Answering {
                    player: player.clone(),
                    index,
                });
            }

            let reply = self.console.ask(&Prompt::Answer {
                number: index + 1,
                total: scorer.total(),
                question,
            })?;

            if parse_selection(&reply).and_then(|s| scorer.answer(s)).is_err() {
                self.console.say("Invalid Answer. Try again")?;
            }
        }

        Ok(scorer.finish()?)
    }
}
