//! Animation Primitives - Players, Sequences and Cancellation
//!
//! Everything in here is timer-driven and cooperative. A run is a chain of
//! [`FieldStep`]s played one at a time by a [`CharacterStreamPlayer`]; each
//! step checks its [`RunToken`] before every emission, so a superseded run
//! stops at the next character boundary.
//!
//! # Layering
//!
//! ```text
//! FieldSequence (ordered steps, early exit)
//!     │
//!     └─→ CharacterStreamPlayer (prefixes of one string)
//!             │
//!             └─→ StepSink (owner of the visible text decides whether to accept)
//! ```

mod player;
mod sequencer;
mod timing;

pub use player::{CharacterStreamPlayer, PrefixFrames};
pub use sequencer::{FieldSequence, FieldStep, StepSink};
pub use timing::{detect_motion_preference, MotionPreference, TypingDelays};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Playback direction of a character stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Reveal increasing prefixes, from empty to the full string
    Forward,
    /// Reveal decreasing prefixes, from the full string to empty
    Reverse,
}

impl Direction {
    /// The text a step in this direction ends on
    #[must_use]
    pub fn final_text(self, source: &str) -> &str {
        match self {
            Self::Forward => source,
            Self::Reverse => "",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// A run stopped before it finished.
///
/// Not a failure: it only tells the caller not to chain the next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("run {generation} was canceled")]
pub struct CanceledRun {
    /// Generation of the run that was canceled
    pub generation: u64,
}

/// Completion of a run or step: `Ok` when it ran to the end
pub type RunResult = Result<(), CanceledRun>;

/// Cancellation token scoped to a single run
///
/// Clones share the same flag. The generation identifies the run in logs and
/// lets the owner of the state reject writes from anything but the current run.
#[derive(Clone, Debug)]
pub struct RunToken {
    generation: u64,
    cancelled: Arc<AtomicBool>,
}

impl RunToken {
    /// Create a live token for the given run generation
    #[must_use]
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Generation of the run this token belongs to
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Request cancellation; takes effect at the next step boundary
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err` once the token is canceled
    ///
    /// # Errors
    ///
    /// Returns [`CanceledRun`] carrying this token's generation.
    pub fn check(&self) -> RunResult {
        if self.is_cancelled() {
            Err(CanceledRun {
                generation: self.generation,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cancel_is_shared_between_clones() {
        let token = RunToken::new(7);
        let clone = token.clone();

        assert!(token.check().is_ok());
        clone.cancel();

        assert!(token.is_cancelled());
        assert_eq!(token.check(), Err(CanceledRun { generation: 7 }));
    }

    #[test]
    fn test_final_text() {
        assert_eq!(Direction::Forward.final_text("abc"), "abc");
        assert_eq!(Direction::Reverse.final_text("abc"), "");
    }
}
