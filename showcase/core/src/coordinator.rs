//! Transition Coordinator - The Showcase State Machine
//!
//! The coordinator is the single owner of [`AnimationState`]. It arbitrates
//! clicks against the run currently in flight and drives the two-phase card
//! switch:
//!
//! ```text
//!            click (non-active)            exit done          settle delay
//!   Idle ───────────────────────► Exiting ──────────► Swapping ──────────► Entering
//!    ▲                             │   ▲                                      │
//!    │                             └───┘ click (non-active):                  │
//!    │                          cancel run, restart from visible text,        │
//!    │                          new click becomes the swap target             │
//!    └────────────────────────────────────────────────────────────────────────┘
//!                                       enter done
//! ```
//!
//! Clicks on the active card, and clicks while Swapping or Entering, are
//! ignored. A mount starts directly in Entering for the first card.
//!
//! # Runs and Generations
//!
//! Every run gets a fresh [`RunToken`] with the next generation number.
//! Starting a run cancels the previous token, and every write goes through
//! [`Shared::lock_for`], which refuses writers whose generation is no longer
//! current. A superseded run may finish sleeping, but it can never touch the
//! state again.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use crate::animation::{
    CanceledRun, FieldSequence, FieldStep, MotionPreference, RunResult, RunToken, StepSink,
    TypingDelays,
};
use crate::catalog::Catalog;
use crate::events::ShowcaseEvent;
use crate::projection::{project, RenderProjection};
use crate::state::{ActiveStep, AnimationState, Field, FieldTexts, Phase};

/// Default pause between swapping cards and typing the new one
const DEFAULT_SETTLE_MS: u64 = 150;

/// Coordinator timing configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Per-character delays
    pub delays: TypingDelays,
    /// Pause between Swapping and Entering
    pub settle: Duration,
    /// Motion preference applied to delays and settle
    pub motion: MotionPreference,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            delays: TypingDelays::default(),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
            motion: MotionPreference::Full,
        }
    }
}

impl CoordinatorConfig {
    /// No waiting anywhere
    #[must_use]
    pub fn instant() -> Self {
        Self {
            delays: TypingDelays::instant(),
            settle: Duration::ZERO,
            motion: MotionPreference::None,
        }
    }

    /// Set the per-character delays
    #[must_use]
    pub fn with_delays(mut self, delays: TypingDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Set the settle delay
    #[must_use]
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Set the motion preference
    #[must_use]
    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }

    /// Delays after applying the motion preference
    #[must_use]
    pub fn effective_delays(&self) -> TypingDelays {
        self.delays.for_motion(self.motion)
    }

    /// Settle delay after applying the motion preference
    #[must_use]
    pub fn effective_settle(&self) -> Duration {
        self.motion.scale(self.settle)
    }
}

/// Why a click was ignored
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SelectionRejected {
    /// Index outside the catalog
    #[error("selection {index} is outside the catalog of {len} items")]
    InvalidSelection {
        /// Index that was clicked
        index: usize,
        /// Catalog length
        len: usize,
    },
    /// The card is already active
    #[error("item {index} is already active")]
    AlreadyActive {
        /// Index that was clicked
        index: usize,
    },
    /// Only exits can be interrupted
    #[error("a transition is in progress ({phase})")]
    TransitionInProgress {
        /// Phase at the time of the click
        phase: Phase,
    },
    /// The coordinator has been torn down
    #[error("coordinator has been disposed")]
    Disposed,
}

/// Result of [`TransitionCoordinator::select_item`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A transition from Idle started
    Started {
        /// Swap target
        target: usize,
    },
    /// The running exit was restarted with a new target
    Retargeted {
        /// Target of the canceled exit
        previous: usize,
        /// New swap target
        target: usize,
    },
    /// The click was ignored
    Rejected(SelectionRejected),
}

impl SelectOutcome {
    /// Whether the click changed anything
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Errors when mounting a coordinator
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// Nothing to show
    #[error("cannot mount a showcase with an empty catalog")]
    EmptyCatalog,

    /// Mounted outside a tokio runtime
    #[error("no tokio runtime available to drive the showcase: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

#[derive(Clone, Copy, Debug)]
enum RunKind {
    /// Type the active card
    Enter,
    /// Delete the active card, swap, then type the target
    Exit,
}

struct Inner {
    state: AnimationState,
    /// Token of the current run
    token: RunToken,
    last_generation: u64,
    task: Option<JoinHandle<()>>,
    disposed: bool,
}

struct Shared {
    catalog: Catalog,
    delays: TypingDelays,
    settle: Duration,
    inner: Mutex<Inner>,
    projection_tx: watch::Sender<RenderProjection>,
    events: Option<mpsc::UnboundedSender<ShowcaseEvent>>,
}

impl Shared {
    /// Lock the state on behalf of `token`'s run
    ///
    /// Fails unless that run is still the current one.
    fn lock_for(&self, token: &RunToken) -> Result<MutexGuard<'_, Inner>, CanceledRun> {
        let inner = self.inner.lock();
        if inner.disposed
            || token.is_cancelled()
            || inner.token.generation() != token.generation()
        {
            return Err(CanceledRun {
                generation: token.generation(),
            });
        }
        Ok(inner)
    }

    fn send(&self, event: ShowcaseEvent) {
        if let Some(tx) = &self.events {
            // Nobody listening is fine
            let _ = tx.send(event);
        }
    }

    fn publish(&self, inner: &Inner) {
        self.projection_tx.send_replace(project(&inner.state));
    }

    fn set_phase(&self, inner: &mut Inner, to: Phase) {
        let from = inner.state.phase;
        if !from.can_transition_to(to) {
            warn!(%from, %to, "Unexpected phase transition");
        }
        inner.state.phase = to;

        let generation = inner.token.generation();
        debug!(%from, %to, generation, "Phase changed");
        self.send(ShowcaseEvent::PhaseChanged {
            from,
            to,
            generation,
        });
        self.publish(inner);
    }

    /// Cancel the current run and spawn a new one
    fn start_run(self: &Arc<Self>, runtime: &Handle, inner: &mut Inner, kind: RunKind) -> RunToken {
        inner.token.cancel();
        inner.last_generation += 1;

        let token = RunToken::new(inner.last_generation);
        inner.token = token.clone();
        // Replacing the handle detaches the superseded run; it stops at its
        // next step boundary.
        inner.task = Some(runtime.spawn(Arc::clone(self).drive(token.clone(), kind)));
        token
    }

    async fn drive(self: Arc<Self>, token: RunToken, kind: RunKind) {
        let result = match kind {
            RunKind::Enter => self.enter(&token).await,
            RunKind::Exit => self.exit_then_enter(&token).await,
        };

        if let Err(canceled) = result {
            debug!(generation = canceled.generation, ?kind, "Run ended early");
        }
    }

    async fn exit_then_enter(&self, token: &RunToken) -> RunResult {
        // Delete whatever is on screen now; a restarted exit resumes here
        let sequence = {
            let inner = self.lock_for(token)?;
            let item = &self.catalog[inner.state.active_index];
            FieldSequence::exit(item, &inner.state.visible_text, &self.delays)
        };
        sequence.run(token, &mut StateSink::new(self, token)).await?;

        self.swap(token)?;
        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        self.enter(token).await
    }

    fn swap(&self, token: &RunToken) -> RunResult {
        let mut inner = self.lock_for(token)?;
        let from = inner.state.active_index;
        let to = match inner.state.pending_index.take() {
            Some(target) => target,
            None => {
                warn!(from, "Swap without a pending target");
                from
            }
        };

        inner.state.active_index = to;
        inner.state.content_visible = false;
        inner.state.visible_text = FieldTexts::collapsed(&self.catalog[to]);
        inner.state.active_step = None;

        info!(from, to, generation = token.generation(), "Showcase selection swapped");
        self.send(ShowcaseEvent::SelectionChanged { from, to });
        self.set_phase(&mut inner, Phase::Swapping);
        Ok(())
    }

    async fn enter(&self, token: &RunToken) -> RunResult {
        let sequence = {
            let mut inner = self.lock_for(token)?;
            if inner.state.phase == Phase::Swapping {
                inner.state.content_visible = true;
                self.set_phase(&mut inner, Phase::Entering);
            }
            let item = &self.catalog[inner.state.active_index];
            FieldSequence::enter(item, &inner.state.visible_text, &self.delays)
        };
        sequence.run(token, &mut StateSink::new(self, token)).await?;

        let mut inner = self.lock_for(token)?;
        inner.state.active_step = None;
        self.set_phase(&mut inner, Phase::Idle);
        Ok(())
    }
}

/// Writes a run's emissions into the shared state
struct StateSink<'a> {
    shared: &'a Shared,
    token: &'a RunToken,
}

impl<'a> StateSink<'a> {
    fn new(shared: &'a Shared, token: &'a RunToken) -> Self {
        Self { shared, token }
    }
}

impl StepSink for StateSink<'_> {
    fn begin_step(&mut self, step: &FieldStep) -> RunResult {
        let mut inner = self.shared.lock_for(self.token)?;
        inner.state.active_step = Some(ActiveStep {
            field: step.field,
            target: step.final_text().to_string(),
        });
        self.shared.publish(&inner);
        Ok(())
    }

    fn emit(&mut self, field: Field, text: &str) -> RunResult {
        let mut inner = self.shared.lock_for(self.token)?;
        inner.state.visible_text.set(field, text);

        let generation = self.token.generation();
        trace!(generation, %field, chars = text.chars().count(), "Frame");
        self.shared.send(ShowcaseEvent::Emitted {
            generation,
            field,
            text: text.to_string(),
        });
        self.shared.publish(&inner);
        Ok(())
    }
}

/// Owner of the showcase animation
///
/// Must be mounted from within a tokio runtime; runs are spawned onto it.
/// Dropping the coordinator tears it down.
pub struct TransitionCoordinator {
    shared: Arc<Shared>,
    runtime: Handle,
}

impl TransitionCoordinator {
    /// Mount the showcase; the first card starts typing immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty or no tokio runtime is
    /// running on this thread.
    pub fn mount(catalog: Catalog, config: CoordinatorConfig) -> Result<Self, CoordinatorError> {
        Self::mount_inner(catalog, config, None)
    }

    /// Mount the showcase and report every change on `events`
    ///
    /// # Errors
    ///
    /// See [`TransitionCoordinator::mount`].
    pub fn mount_with_events(
        catalog: Catalog,
        config: CoordinatorConfig,
        events: mpsc::UnboundedSender<ShowcaseEvent>,
    ) -> Result<Self, CoordinatorError> {
        Self::mount_inner(catalog, config, Some(events))
    }

    fn mount_inner(
        catalog: Catalog,
        config: CoordinatorConfig,
        events: Option<mpsc::UnboundedSender<ShowcaseEvent>>,
    ) -> Result<Self, CoordinatorError> {
        let state = match catalog.get(0) {
            Some(first) => AnimationState::mounted(first),
            None => return Err(CoordinatorError::EmptyCatalog),
        };
        let runtime = Handle::try_current()?;

        let (projection_tx, _) = watch::channel(project(&state));
        let token = RunToken::new(1);
        let shared = Arc::new(Shared {
            catalog,
            delays: config.effective_delays(),
            settle: config.effective_settle(),
            inner: Mutex::new(Inner {
                state,
                token: token.clone(),
                last_generation: token.generation(),
                task: None,
                disposed: false,
            }),
            projection_tx,
            events,
        });

        let task = runtime.spawn(Arc::clone(&shared).drive(token, RunKind::Enter));
        shared.inner.lock().task = Some(task);

        info!(
            items = shared.catalog.len(),
            motion = %config.motion,
            "Showcase mounted"
        );

        Ok(Self { shared, runtime })
    }

    /// Handle a click on card `index`
    ///
    /// Never fails loudly: ignored clicks come back as
    /// [`SelectOutcome::Rejected`] and leave the state untouched.
    pub fn select_item(&self, index: usize) -> SelectOutcome {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        let len = shared.catalog.len();

        let outcome = if inner.disposed {
            SelectOutcome::Rejected(SelectionRejected::Disposed)
        } else if index >= len {
            SelectOutcome::Rejected(SelectionRejected::InvalidSelection { index, len })
        } else if index == inner.state.active_index {
            SelectOutcome::Rejected(SelectionRejected::AlreadyActive { index })
        } else {
            match inner.state.phase {
                Phase::Idle | Phase::Exiting => {
                    let previous = inner.state.pending_index.replace(index);
                    let token = shared.start_run(&self.runtime, &mut inner, RunKind::Exit);

                    shared.send(ShowcaseEvent::TargetChanged {
                        previous,
                        target: index,
                        generation: token.generation(),
                    });
                    shared.set_phase(&mut inner, Phase::Exiting);

                    match previous {
                        Some(previous) => SelectOutcome::Retargeted {
                            previous,
                            target: index,
                        },
                        None => SelectOutcome::Started { target: index },
                    }
                }
                phase @ (Phase::Swapping | Phase::Entering) => {
                    SelectOutcome::Rejected(SelectionRejected::TransitionInProgress { phase })
                }
            }
        };

        if let SelectOutcome::Rejected(reason) = &outcome {
            debug!(index, %reason, "Click ignored");
            shared.send(ShowcaseEvent::ClickRejected {
                index,
                reason: reason.clone(),
            });
        }

        outcome
    }

    /// The latest projection
    #[must_use]
    pub fn projection(&self) -> RenderProjection {
        self.shared.projection_tx.borrow().clone()
    }

    /// Subscribe to projections; receivers only see the latest one
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RenderProjection> {
        self.shared.projection_tx.subscribe()
    }

    /// Snapshot of the full animation state
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.shared.inner.lock().state.clone()
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.shared.inner.lock().state.phase
    }

    /// Selected card
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.shared.inner.lock().state.active_index
    }

    /// The items being shown
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.shared.catalog
    }

    /// Whether [`TransitionCoordinator::shutdown`] has run
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.shared.inner.lock().disposed
    }

    /// Wait until the current card has settled
    ///
    /// Returns right away once the coordinator is disposed.
    pub async fn wait_idle(&self) -> RenderProjection {
        let mut rx = self.subscribe();
        loop {
            let current = rx.borrow_and_update().clone();
            if current.phase == Phase::Idle || self.is_disposed() {
                return current;
            }
            if rx.changed().await.is_err() {
                return current;
            }
        }
    }

    /// Cancel the run in flight and refuse further clicks
    ///
    /// Nothing is written to the state after this returns.
    pub fn shutdown(&self) {
        let mut inner = self.shared.inner.lock();
        if inner.disposed {
            return;
        }

        inner.disposed = true;
        inner.token.cancel();
        if let Some(task) = inner.task.take() {
            task.abort();
        }

        info!(
            generation = inner.token.generation(),
            phase = %inner.state.phase,
            "Showcase disposed"
        );
        self.shared.send(ShowcaseEvent::Disposed);
        drop(inner);

        // Wake anyone parked in wait_idle
        self.shared.projection_tx.send_modify(|_| {});
    }
}

impl Drop for TransitionCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for TransitionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.inner.lock();
        f.debug_struct("TransitionCoordinator")
            .field("phase", &inner.state.phase)
            .field("active_index", &inner.state.active_index)
            .field("pending_index", &inner.state.pending_index)
            .field("generation", &inner.token.generation())
            .field("disposed", &inner.disposed)
            .finish_non_exhaustive()
    }
}
