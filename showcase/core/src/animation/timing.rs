//! Typing Delays and Motion Preference
//!
//! Per-character delays for every step of the enter and exit sequences, and
//! the reduced-motion preference that scales them.
//!
//! # Motion Preferences
//!
//! - `Full`: configured delays
//! - `Reduced`: delays at 0.25x, so text settles four times sooner
//! - `None`: no waiting at all; every frame is still emitted in order
//!
//! `REDUCE_MOTION=1` / `reduced` selects `Reduced`, `REDUCE_MOTION=none` /
//! `static` selects `None`. `SHOWCASE_MOTION` takes the same values and wins
//! when both are set.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-character delays for the showcase sequences
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingDelays {
    /// Deleting the short label before the full title is typed
    pub title_delete: Duration,
    /// Typing the full title
    pub title_type: Duration,
    /// Typing the problem statement
    pub problem_type: Duration,
    /// Typing the solution
    pub solution_type: Duration,
    /// Typing the impact stat
    pub impact_type: Duration,
    /// Deleting the impact stat on exit
    pub exit_impact_delete: Duration,
    /// Deleting the solution on exit
    pub exit_solution_delete: Duration,
    /// Deleting the problem statement on exit
    pub exit_problem_delete: Duration,
    /// Deleting the full title on exit
    pub exit_title_delete: Duration,
    /// Retyping the short label once the title is gone
    pub exit_label_type: Duration,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self {
            title_delete: Duration::from_millis(5),
            title_type: Duration::from_millis(30),
            problem_type: Duration::from_millis(10),
            solution_type: Duration::from_millis(10),
            impact_type: Duration::from_millis(20),
            exit_impact_delete: Duration::from_millis(3),
            exit_solution_delete: Duration::from_millis(2),
            exit_problem_delete: Duration::from_millis(2),
            exit_title_delete: Duration::from_millis(3),
            exit_label_type: Duration::from_millis(15),
        }
    }
}

impl TypingDelays {
    /// Every delay set to zero
    #[must_use]
    pub fn instant() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Every delay set to the same value
    #[must_use]
    pub fn uniform(delay: Duration) -> Self {
        Self {
            title_delete: delay,
            title_type: delay,
            problem_type: delay,
            solution_type: delay,
            impact_type: delay,
            exit_impact_delete: delay,
            exit_solution_delete: delay,
            exit_problem_delete: delay,
            exit_title_delete: delay,
            exit_label_type: delay,
        }
    }

    /// Scale every delay by `factor` (clamped to be non-negative)
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |d: Duration| scale_duration(d, factor);
        Self {
            title_delete: scale(self.title_delete),
            title_type: scale(self.title_type),
            problem_type: scale(self.problem_type),
            solution_type: scale(self.solution_type),
            impact_type: scale(self.impact_type),
            exit_impact_delete: scale(self.exit_impact_delete),
            exit_solution_delete: scale(self.exit_solution_delete),
            exit_problem_delete: scale(self.exit_problem_delete),
            exit_title_delete: scale(self.exit_title_delete),
            exit_label_type: scale(self.exit_label_type),
        }
    }

    /// Delays adjusted for a motion preference
    #[must_use]
    pub fn for_motion(&self, preference: MotionPreference) -> Self {
        self.scaled(preference.delay_scale())
    }
}

/// User preference for motion and animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreference {
    /// Full animation at configured speed
    #[default]
    Full,
    /// Shortened animation
    Reduced,
    /// No waiting between frames
    None,
}

impl MotionPreference {
    /// Multiplier applied to every delay
    ///
    /// - `Full`: 1.0
    /// - `Reduced`: 0.25
    /// - `None`: 0.0
    #[must_use]
    pub fn delay_scale(self) -> f32 {
        match self {
            MotionPreference::Full => 1.0,
            MotionPreference::Reduced => 0.25,
            MotionPreference::None => 0.0,
        }
    }

    /// Scale a single delay for this preference
    #[must_use]
    pub fn scale(self, delay: Duration) -> Duration {
        scale_duration(delay, self.delay_scale())
    }

    /// Parse a preference name (`full`, `reduced`, `none`, plus the
    /// `REDUCE_MOTION` spellings `1` and `static`)
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "full" | "0" | "off" => Some(Self::Full),
            "reduced" | "1" | "true" => Some(Self::Reduced),
            "none" | "static" => Some(Self::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for MotionPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Reduced => write!(f, "reduced"),
            Self::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for MotionPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown motion preference '{s}'"))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scale_duration(delay: Duration, factor: f32) -> Duration {
    let factor = f64::from(factor.max(0.0));
    Duration::from_nanos((delay.as_nanos() as f64 * factor).round() as u64)
}

/// Detect the motion preference from the environment
///
/// Reads `REDUCE_MOTION` then `SHOWCASE_MOTION` through `env`; the last
/// recognised value wins. Unknown values are logged and skipped. Returns
/// `None` when neither variable names a preference.
pub fn detect_motion_preference<F>(env: F) -> Option<MotionPreference>
where
    F: Fn(&str) -> Option<String>,
{
    let mut detected = None;
    for key in ["REDUCE_MOTION", "SHOWCASE_MOTION"] {
        if let Some(value) = env(key) {
            match MotionPreference::parse(&value) {
                Some(motion) => detected = Some(motion),
                None => tracing::warn!(key, %value, "Ignoring unknown motion preference"),
            }
        }
    }
    detected
}
