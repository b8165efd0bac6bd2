//! Render Projection
//!
//! Pure mapping from [`AnimationState`] to what the presentation layer
//! paints. Safe to call after every mutation; the same state always yields
//! the same projection.

use serde::{Deserialize, Serialize};

use crate::state::{AnimationState, Field, FieldTexts, Phase};

/// Display state for one showcase frame
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderProjection {
    /// Text to paint per field
    pub display_text: FieldTexts,
    /// Whether to draw the typing cursor
    pub show_cursor: bool,
    /// Field the cursor sits at the end of, set whenever `show_cursor` is
    #[serde(default)]
    pub cursor_field: Option<Field>,
    /// Whether the card body is visible
    pub show_content_block: bool,
    /// Whether the call-to-action is shown
    pub show_call_to_action: bool,
    /// Selected card
    pub active_index: usize,
    /// Coordinator phase
    pub phase: Phase,
}

/// Project the animation state for display
#[must_use]
pub fn project(state: &AnimationState) -> RenderProjection {
    let show_cursor = state.phase.is_animating() && state.step_in_progress();
    RenderProjection {
        display_text: state.visible_text.clone(),
        show_cursor,
        cursor_field: state
            .active_step
            .as_ref()
            .filter(|_| show_cursor)
            .map(|step| step.field),
        show_content_block: state.content_visible,
        show_call_to_action: state.phase == Phase::Idle && state.content_visible,
        active_index: state.active_index,
        phase: state.phase,
    }
}

impl From<&AnimationState> for RenderProjection {
    fn from(state: &AnimationState) -> Self {
        project(state)
    }
}
