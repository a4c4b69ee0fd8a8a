//! History navigation
//!
//! A [`Session`] binds one algorithm to one generated [`History`] and a
//! cursor, and replays the history one [`Step`] at a time. Each session is
//! self-contained — multiple sessions (one per algorithm in the TUI)
//! coexist without sharing any state.
//!
//! Rendering is decoupled through an observer closure: [`Session::advance`]
//! and [`Session::retreat`] hand the step at the new cursor position to the
//! caller-supplied callback and never touch a display themselves, so the
//! engine is fully testable without a terminal.

use crate::sequence::{parse_sequence, ValidationError};
use crate::step::{History, Step};
use crate::stepper::Algorithm;
use std::fmt;

/// Non-fatal engine conditions surfaced to the user as notices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The input string contained no parseable numbers
    Validation(ValidationError),

    /// `advance()` was called with the cursor already past the last step
    AtEnd { total: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Validation(err) => write!(f, "{}", err),
            EngineError::AtEnd { total } => {
                write!(f, "reached the end of the sorting steps ({} total)", total)
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Validation(err)
    }
}

/// One algorithm's navigable run: a history plus a cursor into it
///
/// The cursor ranges over `0..=history.len()` and always points at the
/// *next* step to show on [`advance`](Session::advance); the step most
/// recently shown sits at `cursor - 1`.
pub struct Session {
    algorithm: Algorithm,
    history: History,
    cursor: usize,
}

impl Session {
    /// Create a session with an empty history.
    ///
    /// Until the first successful [`initialize`](Session::initialize),
    /// `advance()` reports [`EngineError::AtEnd`] immediately.
    pub fn new(algorithm: Algorithm) -> Self {
        Session {
            algorithm,
            history: History::new(),
            cursor: 0,
        }
    }

    /// Parse `input` and regenerate the history from scratch.
    ///
    /// On success the old history is discarded and the cursor resets to 0.
    /// On a validation failure the existing history and cursor are left
    /// exactly as they were.
    pub fn initialize(&mut self, input: &str) -> Result<(), EngineError> {
        let values = parse_sequence(input)?;
        self.history = self.algorithm.generate(&values);
        self.cursor = 0;
        Ok(())
    }

    /// Show the next step, advancing the cursor past it.
    ///
    /// Emits `history[cursor]` to `observer` and increments the cursor, or
    /// returns [`EngineError::AtEnd`] with the cursor unchanged.
    pub fn advance<F>(&mut self, mut observer: F) -> Result<(), EngineError>
    where
        F: FnMut(&Step),
    {
        match self.history.get(self.cursor) {
            Some(step) => {
                observer(step);
                self.cursor += 1;
                Ok(())
            }
            None => Err(EngineError::AtEnd {
                total: self.history.len(),
            }),
        }
    }

    /// Step back to the previous snapshot.
    ///
    /// Decrements the cursor and emits the step now under it. At the start
    /// of the history this is a silent no-op: the observer does not fire
    /// and no notice is raised (deliberately asymmetric with
    /// [`advance`](Session::advance)).
    pub fn retreat<F>(&mut self, mut observer: F)
    where
        F: FnMut(&Step),
    {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        if let Some(step) = self.history.get(self.cursor) {
            observer(step);
        }
    }

    /// Snapshot at the very start of the history.
    ///
    /// What the UI shows right after a successful initialize, before any
    /// navigation has happened (the raw parsed array).
    pub fn initial(&self) -> Option<&Step> {
        self.history.get(0)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.history.len()
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_past_end_reports_at_end() {
        let mut session = Session::new(Algorithm::Merge);
        session.initialize("1").unwrap();
        assert_eq!(session.total_steps(), 1);

        session.advance(|_| {}).unwrap();
        let err = session.advance(|_| {}).unwrap_err();
        assert_eq!(err, EngineError::AtEnd { total: 1 });
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_retreat_at_start_is_silent() {
        let mut session = Session::new(Algorithm::Bubble);
        session.initialize("2,1").unwrap();

        let mut fired = false;
        session.retreat(|_| fired = true);
        assert!(!fired);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_uninitialized_session_is_at_end() {
        let mut session = Session::new(Algorithm::Insertion);
        let err = session.advance(|_| {}).unwrap_err();
        assert_eq!(err, EngineError::AtEnd { total: 0 });
    }

    #[test]
    fn test_failed_initialize_preserves_state() {
        let mut session = Session::new(Algorithm::Bubble);
        session.initialize("3,1").unwrap();
        session.advance(|_| {}).unwrap();
        let cursor_before = session.cursor();
        let total_before = session.total_steps();

        assert!(session.initialize("a,b,c").is_err());
        assert_eq!(session.cursor(), cursor_before);
        assert_eq!(session.total_steps(), total_before);
    }

    #[test]
    fn test_reinitialize_resets_cursor() {
        let mut session = Session::new(Algorithm::Bubble);
        session.initialize("3,1").unwrap();
        session.advance(|_| {}).unwrap();
        session.advance(|_| {}).unwrap();

        session.initialize("5,4,6").unwrap();
        assert_eq!(session.cursor(), 0);
        assert!(session.at_start());
    }
}
