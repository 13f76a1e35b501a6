//! History navigation over a recorded [`Trace`]
//!
//! A [`Player`] is the cursor the UI moves around: it never re-runs a demo, it
//! only selects which recorded [`Snapshot`] is current.

use crate::trace::{Snapshot, Trace};
use std::fmt;

/// Navigation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// Already at the first snapshot
    AtStart,
    /// Already at the last snapshot
    AtEnd,
    /// The trace has no snapshots
    EmptyTrace,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::AtStart => write!(f, "Already at the beginning of the trace"),
            PlayerError::AtEnd => write!(f, "No more snapshots available (demo finished)"),
            PlayerError::EmptyTrace => write!(f, "No snapshots available"),
        }
    }
}

impl std::error::Error for PlayerError {}

/// Cursor over a trace's snapshot history
#[derive(Debug, Clone)]
pub struct Player {
    trace: Trace,
    history_position: usize,
}

impl Player {
    pub fn new(trace: Trace) -> Self {
        Player {
            trace,
            history_position: 0,
        }
    }

    pub fn step_forward(&mut self) -> Result<(), PlayerError> {
        if self.trace.is_empty() {
            return Err(PlayerError::EmptyTrace);
        }
        if self.history_position + 1 >= self.trace.len() {
            return Err(PlayerError::AtEnd);
        }
        self.history_position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlayerError> {
        if self.trace.is_empty() {
            return Err(PlayerError::EmptyTrace);
        }
        if self.history_position == 0 {
            return Err(PlayerError::AtStart);
        }
        self.history_position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times; returns how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        (0..n).take_while(|_| self.step_forward().is_ok()).count()
    }

    pub fn rewind_to_start(&mut self) -> Result<(), PlayerError> {
        if self.trace.is_empty() {
            return Err(PlayerError::EmptyTrace);
        }
        self.history_position = 0;
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> Result<(), PlayerError> {
        let last = self
            .trace
            .len()
            .checked_sub(1)
            .ok_or(PlayerError::EmptyTrace)?;
        self.history_position = last;
        Ok(())
    }

    /// The snapshot at the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.trace.get(self.history_position)
    }

    /// Console output produced up to the cursor
    pub fn console_output(&self) -> Vec<String> {
        self.trace.console().output_until(self.history_position)
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.trace.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.history_position + 1 >= self.trace.len()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
