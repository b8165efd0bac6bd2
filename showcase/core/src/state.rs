//! Animation State
//!
//! The mutable state behind the showcase. Only the
//! [`TransitionCoordinator`](crate::TransitionCoordinator) writes it; everyone
//! else sees clones or the [`RenderProjection`](crate::RenderProjection).

use serde::{Deserialize, Serialize};

use crate::catalog::ShowcaseItem;

/// A text field on a showcase card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Short label or full title
    Title,
    /// Problem statement
    Problem,
    /// Solution
    Solution,
    /// Impact stat
    Impact,
}

impl Field {
    /// All fields, in enter order
    pub const ALL: [Field; 4] = [Field::Title, Field::Problem, Field::Solution, Field::Impact];

    /// Field name for logs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Impact => "impact",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visible text per field
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTexts {
    /// Title text
    pub title: String,
    /// Problem text
    pub problem: String,
    /// Solution text
    pub solution: String,
    /// Impact text
    pub impact: String,
}

impl FieldTexts {
    /// A fully typed card
    #[must_use]
    pub fn entered(item: &ShowcaseItem) -> Self {
        Self {
            title: item.full_title.clone(),
            problem: item.problem.clone(),
            solution: item.solution.clone(),
            impact: item.impact_stat.clone(),
        }
    }

    /// A collapsed card: short label only
    #[must_use]
    pub fn collapsed(item: &ShowcaseItem) -> Self {
        Self {
            title: item.short_label.clone(),
            ..Self::default()
        }
    }

    /// Text of one field
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Problem => &self.problem,
            Field::Solution => &self.solution,
            Field::Impact => &self.impact,
        }
    }

    /// Replace the text of one field
    pub fn set(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Problem => &mut self.problem,
            Field::Solution => &mut self.solution,
            Field::Impact => &mut self.impact,
        };
        slot.clear();
        slot.push_str(text);
    }
}

/// Coordinator phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Card fully settled, nothing running
    #[default]
    Idle,
    /// Deleting the active card's text
    Exiting,
    /// Selection swapped, content hidden, waiting for the settle delay
    Swapping,
    /// Typing the active card's text
    Entering,
}

impl Phase {
    /// Whether text is currently being typed or deleted
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Exiting | Self::Entering)
    }

    /// Whether `self → next` is a legal transition
    #[must_use]
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Exiting)
                | (Self::Exiting, Self::Exiting | Self::Swapping)
                | (Self::Swapping, Self::Entering)
                | (Self::Entering, Self::Idle)
        )
    }

    /// Phase name for logs
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Exiting => "exiting",
            Self::Swapping => "swapping",
            Self::Entering => "entering",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The step currently being played
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStep {
    /// Field being written
    pub field: Field,
    /// Text the step ends on
    pub target: String,
}

/// Mutable animation state owned by the coordinator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Visible text per field
    pub visible_text: FieldTexts,
    /// Selected card
    pub active_index: usize,
    /// Swap target of a pending transition
    pub pending_index: Option<usize>,
    /// Current phase
    pub phase: Phase,
    /// Whether the card body is shown
    pub content_visible: bool,
    /// Step being played, if any
    pub active_step: Option<ActiveStep>,
}

impl AnimationState {
    /// State at mount: first card collapsed, about to enter
    #[must_use]
    pub fn mounted(first: &ShowcaseItem) -> Self {
        Self {
            visible_text: FieldTexts::collapsed(first),
            active_index: 0,
            pending_index: None,
            phase: Phase::Entering,
            content_visible: true,
            active_step: None,
        }
    }

    /// Whether the active step has not yet reached its final text
    #[must_use]
    pub fn step_in_progress(&self) -> bool {
        self.active_step
            .as_ref()
            .is_some_and(|step| self.visible_text.get(step.field) != step.target)
    }
}
