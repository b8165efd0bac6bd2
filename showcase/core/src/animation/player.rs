//! Character Stream Player
//!
//! Plays one string as a sequence of prefixes: `""`, `"a"`, `"ab"`, ... for
//! [`Direction::Forward`], the same list backwards for [`Direction::Reverse`].
//! A string of `n` characters always yields `n + 1` frames, cut on UTF-8
//! character boundaries.

use std::time::Duration;

use super::{Direction, RunResult, RunToken};

/// Lazy iterator over the prefixes of a string
#[derive(Clone, Debug)]
pub struct PrefixFrames<'a> {
    text: &'a str,
    /// Byte offsets of every prefix end, in playback order
    ends: Vec<usize>,
    next: usize,
}

impl<'a> PrefixFrames<'a> {
    fn new(text: &'a str, direction: Direction) -> Self {
        let mut ends: Vec<usize> = std::iter::once(0)
            .chain(text.char_indices().map(|(i, c)| i + c.len_utf8()))
            .collect();
        if direction == Direction::Reverse {
            ends.reverse();
        }
        Self {
            text,
            ends,
            next: 0,
        }
    }
}

impl<'a> Iterator for PrefixFrames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let end = *self.ends.get(self.next)?;
        self.next += 1;
        Some(&self.text[..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ends.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PrefixFrames<'_> {}

/// Plays a single string character by character
#[derive(Clone, Copy, Debug)]
pub struct CharacterStreamPlayer<'a> {
    text: &'a str,
    direction: Direction,
    delay: Duration,
}

impl<'a> CharacterStreamPlayer<'a> {
    /// Create a player for `text` with a per-character delay
    #[must_use]
    pub fn new(text: &'a str, direction: Direction, delay: Duration) -> Self {
        Self {
            text,
            direction,
            delay,
        }
    }

    /// The frames this player emits, without any timing
    #[must_use]
    pub fn frames(&self) -> PrefixFrames<'a> {
        PrefixFrames::new(self.text, self.direction)
    }

    /// Number of emissions a complete playback produces
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.text.chars().count() + 1
    }

    /// Time a complete playback takes
    #[must_use]
    pub fn duration(&self) -> Duration {
        let gaps = u32::try_from(self.step_count() - 1).unwrap_or(u32::MAX);
        self.delay.saturating_mul(gaps)
    }

    /// Emit every frame in order, sleeping `delay` between frames
    ///
    /// The token is checked before each emission. `emit` may also refuse a
    /// frame (its owner has moved on), which ends playback the same way.
    ///
    /// # Errors
    ///
    /// Returns [`super::CanceledRun`] if the token was canceled or `emit`
    /// refused a frame before the last one was delivered.
    pub async fn play<F>(&self, token: &RunToken, mut emit: F) -> RunResult
    where
        F: FnMut(&'a str) -> RunResult,
    {
        let mut frames = self.frames().peekable();

        while let Some(frame) = frames.next() {
            token.check()?;
            emit(frame)?;

            if frames.peek().is_some() && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::CanceledRun;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_forward_frames() {
        let player = CharacterStreamPlayer::new("abc", Direction::Forward, Duration::ZERO);
        let frames: Vec<_> = player.frames().collect();
        assert_eq!(frames, vec!["", "a", "ab", "abc"]);
    }

    #[test]
    fn test_reverse_frames() {
        let player = CharacterStreamPlayer::new("abc", Direction::Reverse, Duration::ZERO);
        let frames: Vec<_> = player.frames().collect();
        assert_eq!(frames, vec!["abc", "ab", "a", ""]);
    }

    #[test]
    fn test_empty_string_single_frame() {
        let player = CharacterStreamPlayer::new("", Direction::Forward, Duration::ZERO);
        assert_eq!(player.frames().collect::<Vec<_>>(), vec![""]);
        assert_eq!(player.step_count(), 1);
        assert_eq!(player.duration(), Duration::ZERO);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let player = CharacterStreamPlayer::new("3×", Direction::Forward, Duration::ZERO);
        let frames: Vec<_> = player.frames().collect();
        assert_eq!(frames, vec!["", "3", "3×"]);
        assert_eq!(player.frames().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_emits_every_frame_with_delay() {
        let player =
            CharacterStreamPlayer::new("hey", Direction::Forward, Duration::from_millis(10));
        let token = RunToken::new(1);
        let mut seen = Vec::new();

        let start = tokio::time::Instant::now();
        let result = player
            .play(&token, |frame| {
                seen.push(frame.to_string());
                Ok(())
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(seen, vec!["", "h", "he", "hey"]);
        // Three gaps between four frames, no trailing sleep
        assert_eq!(start.elapsed(), Duration::from_millis(30));
        assert_eq!(player.duration(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_stops_at_cancel_boundary() {
        let player =
            CharacterStreamPlayer::new("delete", Direction::Reverse, Duration::from_millis(3));
        let token = RunToken::new(4);
        let canceller = token.clone();
        let mut seen = Vec::new();

        let result = player
            .play(&token, |frame| {
                seen.push(frame.to_string());
                if seen.len() == 2 {
                    canceller.cancel();
                }
                Ok(())
            })
            .await;

        assert_eq!(result, Err(CanceledRun { generation: 4 }));
        assert_eq!(seen, vec!["delete", "delet"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_on_canceled_token_emits_nothing() {
        let player = CharacterStreamPlayer::new("abc", Direction::Forward, Duration::ZERO);
        let token = RunToken::new(2);
        token.cancel();

        let mut emitted = 0;
        let result = player
            .play(&token, |_| {
                emitted += 1;
                Ok(())
            })
            .await;

        assert!(result.is_err());
        assert_eq!(emitted, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refused_frame_ends_playback() {
        let player = CharacterStreamPlayer::new("abcd", Direction::Forward, Duration::ZERO);
        let token = RunToken::new(9);
        let mut accepted = Vec::new();

        let result = player
            .play(&token, |frame| {
                if frame.len() == 2 {
                    return Err(CanceledRun { generation: 9 });
                }
                accepted.push(frame.to_string());
                Ok(())
            })
            .await;

        assert!(result.is_err());
        assert_eq!(accepted, vec!["", "a"]);
    }
}
