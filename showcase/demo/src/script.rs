//! Scripted clicks
//!
//! `--click INDEX@OFFSET` selects card `INDEX` at `OFFSET` after start.
//! Offsets are milliseconds; an `ms` or `s` suffix is accepted.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errors parsing a `--click` argument
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClickParseError {
    /// No `@` separator
    #[error("expected INDEX@OFFSET, got '{0}'")]
    MissingSeparator(String),

    /// Index is not a number
    #[error("invalid card index '{0}'")]
    InvalidIndex(String),

    /// Offset is not a number
    #[error("invalid offset '{0}' (use e.g. 1500, 1500ms or 2s)")]
    InvalidOffset(String),
}

/// A click on card `index`, `at` after start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Click {
    /// Card to select
    pub index: usize,
    /// Offset from start
    pub at: Duration,
}

impl FromStr for Click {
    type Err = ClickParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, offset) = s
            .split_once('@')
            .ok_or_else(|| ClickParseError::MissingSeparator(s.to_string()))?;

        let index = index
            .trim()
            .parse()
            .map_err(|_| ClickParseError::InvalidIndex(index.to_string()))?;

        Ok(Self {
            index,
            at: parse_offset(offset.trim())?,
        })
    }
}

fn parse_offset(offset: &str) -> Result<Duration, ClickParseError> {
    let invalid = || ClickParseError::InvalidOffset(offset.to_string());

    if let Some(ms) = offset.strip_suffix("ms") {
        return ms.trim().parse().map(Duration::from_millis).map_err(|_| invalid());
    }
    if let Some(secs) = offset.strip_suffix('s') {
        let secs: f64 = secs.trim().parse().map_err(|_| invalid())?;
        return Duration::try_from_secs_f64(secs).map_err(|_| invalid());
    }
    offset.parse().map(Duration::from_millis).map_err(|_| invalid())
}

/// Clicks in firing order
#[derive(Clone, Debug, Default)]
pub struct ClickScript {
    clicks: Vec<Click>,
}

impl ClickScript {
    /// Sort clicks by offset; clicks at the same offset keep their order
    pub fn new(mut clicks: Vec<Click>) -> Self {
        clicks.sort_by_key(|click| click.at);
        clicks.reverse();
        Self { clicks }
    }

    /// Next click to fire
    pub fn peek(&self) -> Option<&Click> {
        self.clicks.last()
    }

    /// Remove and return the next click
    pub fn pop(&mut self) -> Option<Click> {
        self.clicks.pop()
    }

    /// Whether every click has fired
    pub fn is_done(&self) -> bool {
        self.clicks.is_empty()
    }

    /// Clicks left to fire
    pub fn len(&self) -> usize {
        self.clicks.len()
    }
}
