//! In-memory record store for players and questions
//!
//! This module holds the server-side state of the quiz:
//! - The ordered player roster with find/create/replace operations
//! - The fixed question bank loaded once at startup
//! - Rank computation against the current roster
//!
//! The store itself is not synchronized. The server shares it behind a single
//! read/write lock and every mutation runs under the write guard, so a
//! check-then-mutate sequence such as `create` is never interleaved.

use log::info;
use shared::{rank_of, Player, Question, QuizError};

use crate::seed;

/// Players and questions served by the quiz API
///
/// Players keep their insertion order, which is also the order they are
/// listed in. Identifiers are unique across the roster.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Registered players in insertion order
    players: Vec<Player>,
    /// Question bank, immutable after construction
    questions: Vec<Question>,
}

impl RecordStore {
    /// Creates a store from an initial roster and question bank
    ///
    /// Every question must have exactly one correct answer, every player must
    /// pass validation and identifiers must be unique.
    pub fn new(players: Vec<Player>, questions: Vec<Question>) -> Result<Self, QuizError> {
        for question in &questions {
            question.validate()?;
        }

        let mut store = Self {
            players: Vec::with_capacity(players.len()),
            questions,
        };
        for player in players {
            store.create(player)?;
        }

        Ok(store)
    }

    /// Creates a store holding the demo players and questions
    pub fn seeded() -> Result<Self, QuizError> {
        Self::new(seed::players(), seed::questions())
    }

    /// Returns all players in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Finds a player by identifier without touching the roster
    pub fn find(&self, id: &str) -> Result<&Player, QuizError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| QuizError::NotFound(id.to_string()))
    }

    /// Appends a new player
    ///
    /// Fails with `DuplicateIdentifier` when the id is already taken and with
    /// `InvalidInput` when the record does not validate. The roster is left
    /// untouched on failure.
    pub fn create(&mut self, player: Player) -> Result<&Player, QuizError> {
        player.validate()?;

        if self.find(&player.id).is_ok() {
            return Err(QuizError::DuplicateIdentifier(player.id));
        }

        info!("Registered player {} ({})", player.id, player.name);
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Overwrites the record stored under `id`
    ///
    /// The replacement is validated before anything is written, and its own
    /// identifier must match `id`. Either every field is replaced or the
    /// roster is unchanged.
    pub fn replace(&mut self, id: &str, player: Player) -> Result<&Player, QuizError> {
        player.validate()?;

        if player.id != id {
            return Err(QuizError::InvalidInput(format!(
                "record id {} does not match {}",
                player.id, id
            )));
        }

        let slot = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| QuizError::NotFound(id.to_string()))?;

        info!("Updated player {} (score {} -> {})", id, slot.score, player.score);
        *slot = player;
        Ok(&*slot)
    }

    /// Ranks a stored player against the whole roster
    pub fn rank(&self, id: &str) -> Result<usize, QuizError> {
        rank_of(&self.players, id)
    }

    /// Returns the number of registered players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if no players are registered
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
