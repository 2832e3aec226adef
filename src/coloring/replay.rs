//! Trace replay state machine.
//!
//! Presentation layers animate a coloring run by stepping through its
//! trace. The replay itself is a small linear state machine,
//! `NotStarted → InProgress(i) → Completed`, advanced one step at a
//! time and resettable at any point. Timers (and pause/resume pacing)
//! belong to the caller; this type only holds position.

use serde::{Deserialize, Serialize};

use crate::models::{ColorAssignment, ColoringTrace};

/// Position of a replay within its trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayState {
    /// No step applied yet.
    NotStarted,
    /// Steps `0..=index` applied; more remain.
    InProgress(usize),
    /// Every step applied.
    Completed,
}

/// A replayable view of one coloring run.
///
/// Each `advance` applies exactly one assignment; steps are atomic, so
/// reset needs no rollback — it simply returns to `NotStarted`.
#[derive(Debug, Clone)]
pub struct Replay {
    trace: ColoringTrace,
    state: ReplayState,
}

impl Replay {
    /// Creates a replay positioned before the first step.
    pub fn new(trace: ColoringTrace) -> Self {
        Self {
            trace,
            state: ReplayState::NotStarted,
        }
    }

    /// Current position.
    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// The underlying trace.
    pub fn trace(&self) -> &ColoringTrace {
        &self.trace
    }

    /// Applies the next step and returns the new state.
    ///
    /// Advancing a completed (or empty) replay is a no-op.
    pub fn advance(&mut self) -> ReplayState {
        self.state = match self.state {
            ReplayState::NotStarted if self.trace.is_empty() => ReplayState::Completed,
            ReplayState::NotStarted => self.at(0),
            ReplayState::InProgress(i) => self.at(i + 1),
            ReplayState::Completed => ReplayState::Completed,
        };
        self.state
    }

    /// Returns to `NotStarted`. This is the cancellation path.
    pub fn reset(&mut self) {
        self.state = ReplayState::NotStarted;
    }

    /// Index of the step most recently applied.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            ReplayState::NotStarted => None,
            ReplayState::InProgress(i) => Some(i),
            ReplayState::Completed => self.trace.len().checked_sub(1),
        }
    }

    /// Partial coloring at the current position.
    ///
    /// `NotStarted` yields an empty assignment; `Completed` the full one.
    pub fn current_assignment(&self) -> ColorAssignment {
        match self.current_index() {
            Some(i) => self.trace.snapshot(i),
            None => ColorAssignment::new(),
        }
    }

    /// Fraction of steps applied, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.trace.is_empty() {
            return match self.state {
                ReplayState::NotStarted => 0.0,
                _ => 1.0,
            };
        }
        match self.current_index() {
            Some(i) => (i + 1) as f64 / self.trace.len() as f64,
            None => 0.0,
        }
    }

    fn at(&self, index: usize) -> ReplayState {
        if index + 1 >= self.trace.len() {
            ReplayState::Completed
        } else {
            ReplayState::InProgress(index)
        }
    }
}
