//! A single player's session against one solution.
//!
//! # Examples
//!
//! ```
//! use nerditt::game::{Game, GameStatus};
//!
//! let mut game = Game::new("12+34=46");
//! for c in "21+43=64".chars() {
//!     game.push_char(c);
//! }
//! let statuses = game.submit()?;
//! assert_eq!(statuses.len(), 8);
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.attempts_left(), 5);
//! # Ok::<(), nerditt::game::GameError>(())
//! ```

use std::collections::BTreeMap;

use crate::comparator::{check_guess, CharStatus};
use crate::equation_char::EQUATION_LENGTH;
use crate::errors::ValidationError;
use crate::keyboard::key_statuses;
use crate::store::{GameStore, SavedGame, StoreError};
use crate::validator::validate_equation;

pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Why a submission was refused. The game state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("Not enough characters")]
    NotEnoughCharacters { have: usize, need: usize },

    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("The game is already over")]
    GameOver { status: GameStatus },
}

impl GameError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotEnoughCharacters { .. } => "G001",
            GameError::Invalid(_) => "G002",
            GameError::GameOver { .. } => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GameError::NotEnoughCharacters { .. } => "Guess is incomplete",
            GameError::Invalid(_) => "Guess is not a valid equation",
            GameError::GameOver { .. } => "No guesses left to make",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GameError::NotEnoughCharacters { .. } => "The guess was submitted before every cell of the row was filled.",
            GameError::Invalid(_) => "The guess failed equation validation. This wraps an underlying ValidationError (see Validation Errors section for specific error codes).",
            GameError::GameOver { .. } => "The solution was already found, or every attempt has been used.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GameError::NotEnoughCharacters { .. } => Some("Fill every cell before pressing enter"),
            GameError::GameOver { .. } => Some("Come back for the next puzzle"),
            GameError::Invalid(_) => None, // ValidationError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            GameError::Invalid(ve) => ve.display_detailed(),
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    solution: String,
    guesses: Vec<String>,
    current: String,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(solution: impl Into<String>) -> Self {
        Game {
            solution: solution.into(),
            guesses: Vec::new(),
            current: String::new(),
            status: GameStatus::Playing,
        }
    }

    /// Resume from `saved` if it belongs to `solution`; otherwise start fresh.
    #[must_use]
    pub fn restore(solution: impl Into<String>, saved: Option<SavedGame>) -> Self {
        let mut game = Game::new(solution);
        match saved {
            Some(saved) if saved.solution == game.solution => {
                game.guesses = saved.guesses;
                game.status = status_after(&game.guesses, &game.solution);
                log::debug!("restored {} guesses ({:?})", game.guesses.len(), game.status);
            }
            Some(_) => log::debug!("saved game is for a different solution; starting fresh"),
            None => {}
        }
        game
    }

    /// Load the game saved under `key`, or start fresh.
    ///
    /// A malformed saved value is treated as missing.
    ///
    /// # Errors
    /// Store failures other than malformed data (`StoreError::Io`, `StoreError::InvalidKey`).
    pub fn load_from<S: GameStore + ?Sized>(
        store: &S,
        key: &str,
        solution: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let saved = match store.load(key) {
            Ok(saved) => saved,
            Err(StoreError::Json(e)) => {
                log::warn!("ignoring unreadable saved game under {key:?}: {e}");
                None
            }
            Err(e) => return Err(e),
        };
        Ok(Game::restore(solution, saved))
    }

    /// # Errors
    /// Whatever the store reports.
    pub fn save_to<S: GameStore + ?Sized>(&self, store: &mut S, key: &str) -> Result<(), StoreError> {
        store.save(key, &self.saved())
    }

    #[must_use]
    pub fn saved(&self) -> SavedGame {
        SavedGame {
            solution: self.solution.clone(),
            guesses: self.guesses.clone(),
        }
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Append `c` to the current guess. Returns `false` (and does nothing) once
    /// the game is over or the row is full.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.status != GameStatus::Playing || self.current.chars().count() >= EQUATION_LENGTH {
            return false;
        }
        self.current.push(c);
        true
    }

    /// Remove the last character of the current guess.
    pub fn delete_char(&mut self) -> Option<char> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.current.pop()
    }

    pub fn clear_current(&mut self) {
        self.current.clear();
    }

    /// Submit the current guess.
    ///
    /// On success the guess is recorded, the row is cleared and its statuses
    /// are returned.
    ///
    /// # Errors
    /// - `GameOver` once the game is won or lost.
    /// - `NotEnoughCharacters` when the row isn't full.
    /// - `Invalid` when the guess isn't a valid equation; the row is kept for editing.
    pub fn submit(&mut self) -> Result<Vec<CharStatus>, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::GameOver { status: self.status });
        }
        let have = self.current.chars().count();
        if have != EQUATION_LENGTH {
            return Err(GameError::NotEnoughCharacters { have, need: EQUATION_LENGTH });
        }
        validate_equation(&self.current)?;

        let guess = std::mem::take(&mut self.current);
        let statuses = check_guess(&guess, &self.solution);
        self.guesses.push(guess);
        self.status = status_after(&self.guesses, &self.solution);
        log::debug!(
            "guess {}/{MAX_ATTEMPTS} accepted; status {:?}",
            self.guesses.len(),
            self.status
        );
        Ok(statuses)
    }

    /// Statuses of every submitted row, in order.
    #[must_use]
    pub fn board(&self) -> Vec<Vec<CharStatus>> {
        self.guesses.iter().map(|g| check_guess(g, &self.solution)).collect()
    }

    #[must_use]
    pub fn key_statuses(&self) -> BTreeMap<char, CharStatus> {
        key_statuses(&self.guesses, &self.solution)
    }
}

fn status_after(guesses: &[String], solution: &str) -> GameStatus {
    if guesses.iter().any(|g| g == solution) {
        GameStatus::Won
    } else if guesses.len() >= MAX_ATTEMPTS {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
