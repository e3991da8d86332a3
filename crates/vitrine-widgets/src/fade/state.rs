//! Deferred-commit state machine for the fade carousel
//!
//! Navigation requests do not mutate the index immediately: they issue a
//! commit token, and the caller schedules a fixed delay before presenting
//! the token back. Issuing a new request replaces the pending entry, so a
//! superseded token commits nothing (latest wins).

use std::time::Duration;

use crate::animation::{Easing, Tween};

/// Delay between a navigation request and the index commit.
pub const FADE_COMMIT_DELAY: Duration = Duration::from_millis(500);

/// Duration of the opacity cross-fade after a commit.
pub const FADE_TRANSITION: Duration = Duration::from_millis(500);

/// Auto-play interval when the config does not override it.
pub const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(4000);

/// Proof that a scheduled commit belongs to the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToken(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    target: usize,
    token: u64,
}

#[derive(Debug, Clone)]
struct CrossFade {
    from: usize,
    tween: Tween,
}

/// Fade carousel state: active index, pending deferred commit, and the
/// running cross-fade.
#[derive(Debug, Clone)]
pub struct FadeState {
    current: usize,
    len: usize,
    pending: Option<Pending>,
    issued: u64,
    crossfade: Option<CrossFade>,
    auto_play_interval: Duration,
}

impl FadeState {
    /// State over `len` slides, starting at slide 0. `len` is at least 1;
    /// slide sets are non-empty by construction.
    pub fn new(len: usize, auto_play_interval: Duration) -> Self {
        debug_assert!(len >= 1);
        Self {
            current: 0,
            len,
            pending: None,
            issued: 0,
            crossfade: None,
            auto_play_interval,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn auto_play_interval(&self) -> Duration {
        self.auto_play_interval
    }

    /// Change the auto-play cadence; the subscription derived from this
    /// value reschedules the timer on the next update.
    pub fn set_auto_play_interval(&mut self, interval: Duration) {
        self.auto_play_interval = interval;
    }

    /// Request the next slide (wraps). Returns the commit token to
    /// schedule.
    pub fn next(&mut self) -> Option<TransitionToken> {
        self.request((self.current + 1) % self.len)
    }

    /// Request the previous slide (wraps).
    pub fn previous(&mut self) -> Option<TransitionToken> {
        self.request((self.current + self.len - 1) % self.len)
    }

    /// Request a specific slide. Selecting the active slide is a no-op and
    /// schedules nothing.
    pub fn go_to(&mut self, index: usize) -> Option<TransitionToken> {
        if index == self.current {
            return None;
        }
        self.request(index)
    }

    /// Timer-driven advance; only acts when no commit is pending.
    pub fn auto_advance(&mut self) -> Option<TransitionToken> {
        if self.pending.is_some() {
            return None;
        }
        self.next()
    }

    fn request(&mut self, target: usize) -> Option<TransitionToken> {
        debug_assert!(target < self.len);
        self.issued += 1;
        // Replacing the pending entry invalidates its token.
        self.pending = Some(Pending {
            target,
            token: self.issued,
        });
        Some(TransitionToken(self.issued))
    }

    /// Apply a scheduled commit. Superseded tokens are ignored and report
    /// `false`.
    pub fn commit(&mut self, token: TransitionToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token.0 => {
                self.pending = None;
                if pending.target != self.current {
                    self.crossfade = Some(CrossFade {
                        from: self.current,
                        tween: Tween::new(0.0, 1.0, FADE_TRANSITION, Easing::InOut),
                    });
                    self.current = pending.target;
                }
                true
            }
            _ => false,
        }
    }

    /// True while a commit is pending (the window between a request and
    /// its deferred index change).
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// True while the opacity cross-fade is running.
    pub fn is_animating(&self) -> bool {
        self.crossfade.is_some()
    }

    /// Advance the cross-fade by one frame.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(crossfade) = &mut self.crossfade {
            crossfade.tween.advance(dt);
            if crossfade.tween.is_done() {
                self.crossfade = None;
            }
        }
    }

    /// Opacity of the slide at `position`: 1 for the active slide, 0 for
    /// the rest, eased intermediates for the pair bridged by a cross-fade.
    pub fn opacity_of(&self, position: usize) -> f32 {
        if let Some(crossfade) = &self.crossfade {
            let progress = crossfade.tween.value();
            if position == self.current {
                progress
            } else if position == crossfade.from {
                1.0 - progress
            } else {
                0.0
            }
        } else if position == self.current {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(len: usize) -> FadeState {
        FadeState::new(len, DEFAULT_AUTO_PLAY_INTERVAL)
    }

    #[test]
    fn test_select_active_slide_is_noop() {
        let mut fade = state(5);
        assert!(fade.go_to(0).is_none());
        assert!(!fade.is_transitioning());
    }

    #[test]
    fn test_commit_applies_target() {
        let mut fade = state(5);
        let token = fade.next().unwrap();
        assert_eq!(fade.current(), 0, "index change is deferred");
        assert!(fade.commit(token));
        assert_eq!(fade.current(), 1);
        assert!(fade.is_animating());
    }

    #[test]
    fn test_superseded_token_is_ignored() {
        let mut fade = state(5);
        let first = fade.next().unwrap();
        let second = fade.go_to(3).unwrap();

        assert!(!fade.commit(first));
        assert_eq!(fade.current(), 0);
        assert!(fade.is_transitioning());

        assert!(fade.commit(second));
        assert_eq!(fade.current(), 3);
        assert!(!fade.is_transitioning());
    }

    #[test]
    fn test_auto_advance_waits_for_pending_commit() {
        let mut fade = state(5);
        let token = fade.next().unwrap();
        assert!(fade.auto_advance().is_none());
        fade.commit(token);
        assert!(fade.auto_advance().is_some());
    }

    #[test]
    fn test_auto_play_wraps() {
        let mut fade = state(3);
        for expected in [1, 2, 0, 1] {
            let token = fade.auto_advance().unwrap();
            fade.commit(token);
            assert_eq!(fade.current(), expected);
        }
    }

    #[test]
    fn test_previous_wraps() {
        let mut fade = state(5);
        let token = fade.previous().unwrap();
        fade.commit(token);
        assert_eq!(fade.current(), 4);
    }

    #[test]
    fn test_opacity_before_and_after_fade() {
        let mut fade = state(3);
        assert_eq!(fade.opacity_of(0), 1.0);
        assert_eq!(fade.opacity_of(1), 0.0);

        let token = fade.next().unwrap();
        fade.commit(token);

        // Mid-fade the bridged pair sums to one, the rest stay hidden.
        fade.tick(Duration::from_millis(250));
        let pair = fade.opacity_of(0) + fade.opacity_of(1);
        assert!((pair - 1.0).abs() < 1e-5);
        assert_eq!(fade.opacity_of(2), 0.0);

        for _ in 0..40 {
            fade.tick(crate::animation::TICK_INTERVAL);
        }
        assert!(!fade.is_animating());
        assert_eq!(fade.opacity_of(1), 1.0);
        assert_eq!(fade.opacity_of(0), 0.0);
    }

    #[test]
    fn test_stale_token_after_commit_is_ignored() {
        let mut fade = state(5);
        let token = fade.next().unwrap();
        assert!(fade.commit(token));
        assert!(!fade.commit(token), "a token commits at most once");
        assert_eq!(fade.current(), 1);
    }
}
