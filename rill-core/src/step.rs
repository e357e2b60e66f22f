// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Termination protocol shared by every producer and combinator.
//!
//! A consumer answers [`Step`] after each element; a drive reports [`Drive`]
//! when it returns. Giving the two directions of the protocol their own
//! types (instead of raw booleans) keeps the stop contract visible at every
//! layer boundary.

/// Verdict a consumer returns after receiving an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Step {
    /// Keep producing.
    Continue,
    /// Decline further elements. The producer must issue no further
    /// callbacks and release any held state before returning.
    Stop,
}

impl Step {
    /// Returns `true` if this verdict ends the drive.
    pub const fn is_stop(self) -> bool {
        matches!(self, Step::Stop)
    }
}

/// Outcome of driving a sequence to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Drive {
    /// The sequence ran out of elements.
    Completed,
    /// The consumer stopped the drive early.
    Stopped,
}

impl Drive {
    /// Returns `true` if the consumer cut the drive short.
    pub const fn was_stopped(self) -> bool {
        matches!(self, Drive::Stopped)
    }

    /// Verdict to forward when this drive ran nested inside another one.
    pub const fn as_step(self) -> Step {
        match self {
            Drive::Completed => Step::Continue,
            Drive::Stopped => Step::Stop,
        }
    }
}
