//! Showcase Core - Headless Sequenced Text Animator
//!
//! This crate drives the use-case showcase: a row of cards where selecting a
//! card deletes the text of the active one, swaps the selection, and types
//! out the new card field by field. It is completely independent of any UI
//! framework; a browser, a terminal, or a test harness consumes the same
//! [`RenderProjection`] stream.
//!
//! # Architecture
//!
//! ```text
//!   select_item(index)
//!          │
//! ┌────────▼─────────────────────────────────────────────────────────┐
//! │                     TransitionCoordinator                        │
//! │   Idle ──► Exiting ──► Swapping ──► Entering ──► Idle            │
//! │              ▲  │                                                │
//! │              └──┘ (new click: cancel + restart, last click wins) │
//! │                                                                  │
//! │  ┌────────────────────┐    ┌───────────────────────────────────┐ │
//! │  │   FieldSequence    │───►│   CharacterStreamPlayer (per step) │ │
//! │  └────────────────────┘    └───────────────────────────────────┘ │
//! │            │ emissions (gated by RunToken + generation)          │
//! │            ▼                                                     │
//! │      AnimationState ──► project() ──► watch::Receiver            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`TransitionCoordinator`]: owns [`AnimationState`] and the single in-flight run
//! - [`FieldSequence`]: strictly ordered per-field typing/deleting steps
//! - [`CharacterStreamPlayer`]: prefix-by-prefix playback of one string
//! - [`RenderProjection`]: what the presentation layer paints
//! - [`Catalog`]: the static list of [`ShowcaseItem`]s
//!
//! # Quick Start
//!
//! ```ignore
//! use showcase_core::{Catalog, CoordinatorConfig, TransitionCoordinator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let coordinator =
//!         TransitionCoordinator::mount(Catalog::builtin(), CoordinatorConfig::default()).unwrap();
//!
//!     // First card types itself out on mount
//!     coordinator.wait_idle().await;
//!
//!     coordinator.select_item(1);
//!     let settled = coordinator.wait_idle().await;
//!     assert_eq!(settled.active_index, 1);
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`animation`]: player, sequencer, cancellation tokens, delays and motion preference
//! - [`catalog`]: showcase items and catalog loading/validation
//! - [`config`]: TOML/env/CLI configuration
//! - [`contact`]: wire types for the contact form collaborator
//! - [`coordinator`]: the transition state machine
//! - [`events`]: ordered event feed for timelines and diagnostics
//! - [`projection`]: pure state-to-display mapping
//! - [`state`]: animation state and phases

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod coordinator;
pub mod events;
pub mod projection;
pub mod state;

// Re-exports for convenience
pub use animation::{
    detect_motion_preference, CanceledRun, CharacterStreamPlayer, Direction, FieldSequence,
    FieldStep, MotionPreference, PrefixFrames, RunResult, RunToken, StepSink, TypingDelays,
};
pub use catalog::{Catalog, CatalogError, ShowcaseItem};
pub use config::{
    default_config_path, load_config, load_config_from_path, load_config_with_env, ConfigError,
    ConfigOverrides, ConfigSource, ShowcaseConfig, ShowcaseToml,
};
pub use contact::{ContactError, ContactRequest, ContactResponse};
pub use coordinator::{
    CoordinatorConfig, CoordinatorError, SelectOutcome, SelectionRejected, TransitionCoordinator,
};
pub use events::ShowcaseEvent;
pub use projection::{project, RenderProjection};
pub use state::{ActiveStep, AnimationState, Field, FieldTexts, Phase};
