//! Field Sequencer
//!
//! Chains character streams across the card fields. Steps run strictly in
//! list order; field N+1 starts only after field N completed, and a cancel
//! anywhere ends the whole sequence.
//!
//! # Card Sequences
//!
//! ```text
//! enter: title(delete label) → title(type full) → problem → solution → impact
//! exit:  impact → solution → problem → title(delete full) → title(type label)
//! ```
//!
//! Deletion always starts from the text currently on screen, so an exit that
//! was interrupted and restarted picks up where the previous one stopped.

use std::time::Duration;

use super::{CharacterStreamPlayer, Direction, RunResult, RunToken, TypingDelays};
use crate::catalog::ShowcaseItem;
use crate::state::{Field, FieldTexts};

/// One character stream within a sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldStep {
    /// Field the stream writes to
    pub field: Field,
    /// Text being typed or deleted
    pub source: String,
    /// Playback direction
    pub direction: Direction,
    /// Per-character delay
    pub delay: Duration,
}

impl FieldStep {
    /// Type `source` into `field`
    pub fn typing(field: Field, source: impl Into<String>, delay: Duration) -> Self {
        Self {
            field,
            source: source.into(),
            direction: Direction::Forward,
            delay,
        }
    }

    /// Delete `source` from `field`
    pub fn deleting(field: Field, source: impl Into<String>, delay: Duration) -> Self {
        Self {
            field,
            source: source.into(),
            direction: Direction::Reverse,
            delay,
        }
    }

    /// Text the field shows once this step completes
    #[must_use]
    pub fn final_text(&self) -> &str {
        self.direction.final_text(&self.source)
    }

    fn player(&self) -> CharacterStreamPlayer<'_> {
        CharacterStreamPlayer::new(&self.source, self.direction, self.delay)
    }
}

/// Receiver of a sequence's emissions
///
/// The sink owns the visible text. Returning `Err` from either method refuses
/// the write and ends the sequence.
pub trait StepSink {
    /// Called before the first emission of each step
    ///
    /// # Errors
    ///
    /// Returns [`super::CanceledRun`] to stop the sequence.
    fn begin_step(&mut self, _step: &FieldStep) -> RunResult {
        Ok(())
    }

    /// Called for every frame
    ///
    /// # Errors
    ///
    /// Returns [`super::CanceledRun`] to stop the sequence.
    fn emit(&mut self, field: Field, text: &str) -> RunResult;
}

/// Ordered list of field steps
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSequence {
    steps: Vec<FieldStep>,
}

impl FieldSequence {
    /// A sequence where every step plays in the same direction
    pub fn new<I, S>(direction: Direction, steps: I) -> Self
    where
        I: IntoIterator<Item = (Field, S, Duration)>,
        S: Into<String>,
    {
        Self {
            steps: steps
                .into_iter()
                .map(|(field, source, delay)| FieldStep {
                    field,
                    source: source.into(),
                    direction,
                    delay,
                })
                .collect(),
        }
    }

    /// Append a step
    #[must_use]
    pub fn then(mut self, step: FieldStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Sequence that types `item` onto a card currently showing `visible`
    #[must_use]
    pub fn enter(item: &ShowcaseItem, visible: &FieldTexts, delays: &TypingDelays) -> Self {
        Self::default()
            .then(FieldStep::deleting(
                Field::Title,
                visible.title.as_str(),
                delays.title_delete,
            ))
            .then(FieldStep::typing(
                Field::Title,
                item.full_title.as_str(),
                delays.title_type,
            ))
            .then(FieldStep::typing(
                Field::Problem,
                item.problem.as_str(),
                delays.problem_type,
            ))
            .then(FieldStep::typing(
                Field::Solution,
                item.solution.as_str(),
                delays.solution_type,
            ))
            .then(FieldStep::typing(
                Field::Impact,
                item.impact_stat.as_str(),
                delays.impact_type,
            ))
    }

    /// Sequence that deletes `visible` and leaves `item`'s short label
    #[must_use]
    pub fn exit(item: &ShowcaseItem, visible: &FieldTexts, delays: &TypingDelays) -> Self {
        Self::default()
            .then(FieldStep::deleting(
                Field::Impact,
                visible.impact.as_str(),
                delays.exit_impact_delete,
            ))
            .then(FieldStep::deleting(
                Field::Solution,
                visible.solution.as_str(),
                delays.exit_solution_delete,
            ))
            .then(FieldStep::deleting(
                Field::Problem,
                visible.problem.as_str(),
                delays.exit_problem_delete,
            ))
            .then(FieldStep::deleting(
                Field::Title,
                visible.title.as_str(),
                delays.exit_title_delete,
            ))
            .then(FieldStep::typing(
                Field::Title,
                item.short_label.as_str(),
                delays.exit_label_type,
            ))
    }

    /// Steps in play order
    #[must_use]
    pub fn steps(&self) -> &[FieldStep] {
        &self.steps
    }

    /// Total emissions of an uninterrupted run
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.steps.iter().map(|s| s.player().step_count()).sum()
    }

    /// Total time of an uninterrupted run
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(|s| s.player().duration()).sum()
    }

    /// Play every step in order
    ///
    /// # Errors
    ///
    /// Returns [`super::CanceledRun`] as soon as the token is canceled or the
    /// sink refuses a write; remaining steps do not run.
    pub async fn run<S>(&self, token: &RunToken, sink: &mut S) -> RunResult
    where
        S: StepSink + ?Sized,
    {
        for step in &self.steps {
            token.check()?;
            sink.begin_step(step)?;
            step.player()
                .play(token, |frame| sink.emit(step.field, frame))
                .await?;
        }

        Ok(())
    }
}
