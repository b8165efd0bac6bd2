//! Showcase Events
//!
//! Ordered feed of everything the coordinator does. Events are sent while the
//! state lock is held, so their order is the order in which the state
//! changed. The projection channel only keeps the latest frame; this feed
//! keeps all of them, which is what timelines and tests need.

use serde::Serialize;

use crate::coordinator::SelectionRejected;
use crate::state::{Field, Phase};

/// Something the coordinator did
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShowcaseEvent {
    /// Phase changed
    PhaseChanged {
        /// Previous phase
        from: Phase,
        /// New phase
        to: Phase,
        /// Run that caused the change
        generation: u64,
    },
    /// A frame was written to the visible text
    Emitted {
        /// Run that wrote it
        generation: u64,
        /// Field written
        field: Field,
        /// New text of the field
        text: String,
    },
    /// The swap target of the pending transition changed
    TargetChanged {
        /// Previous target, if a transition was already pending
        previous: Option<usize>,
        /// New target
        target: usize,
        /// Run that will perform the swap
        generation: u64,
    },
    /// Active card changed
    SelectionChanged {
        /// Previously active card
        from: usize,
        /// Newly active card
        to: usize,
    },
    /// A click was ignored
    ClickRejected {
        /// Index that was clicked
        index: usize,
        /// Why it was ignored
        reason: SelectionRejected,
    },
    /// Coordinator was torn down
    Disposed,
}

impl ShowcaseEvent {
    /// Run generation carried by the event, if any
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::PhaseChanged { generation, .. }
            | Self::Emitted { generation, .. }
            | Self::TargetChanged { generation, .. } => Some(*generation),
            Self::SelectionChanged { .. } | Self::ClickRejected { .. } | Self::Disposed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation() {
        let event = ShowcaseEvent::Emitted {
            generation: 3,
            field: Field::Title,
            text: "Le".to_string(),
        };
        assert_eq!(event.generation(), Some(3));
        assert_eq!(ShowcaseEvent::Disposed.generation(), None);
    }

    #[test]
    fn test_event_json_shape() {
        let event = ShowcaseEvent::PhaseChanged {
            from: Phase::Idle,
            to: Phase::Exiting,
            generation: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "phase_changed");
        assert_eq!(json["to"], "exiting");
    }
}
