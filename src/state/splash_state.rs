//! Poster splash animation state

use std::time::{Duration, Instant};

/// Animation phase of the poster splash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Poster rising into place
    Rise,
    /// Poster resting at its final position
    Hold,
    /// Animation finished, page takes over
    Complete,
}

/// Poster splash animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Rows the poster still sits below its resting position
    pub rise_offset: f32,
}

impl SplashState {
    /// Duration of the entrance (600ms, same as the page's fade-in)
    const RISE_DURATION: Duration = Duration::from_millis(600);
    /// How long the poster stays before the page is shown
    const HOLD_DURATION: Duration = Duration::from_millis(1500);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Rise,
            rise_offset: 0.0,
        }
    }

    /// Update animation state based on wall-clock time
    pub fn update(&mut self, terminal_height: u16) {
        let elapsed = self.start_time.elapsed();
        self.update_at(elapsed, terminal_height);
    }

    /// Update animation state for a given elapsed time
    pub fn update_at(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }
        // The poster starts a fifth of the screen below where it settles
        let travel = f32::from(terminal_height) / 5.0;

        if elapsed < Self::RISE_DURATION {
            self.phase = SplashPhase::Rise;
            let progress = elapsed.as_secs_f32() / Self::RISE_DURATION.as_secs_f32();
            let eased = simple_easing::cubic_out(progress);
            self.rise_offset = (1.0 - eased) * travel;
        } else if elapsed < Self::RISE_DURATION + Self::HOLD_DURATION {
            self.phase = SplashPhase::Hold;
            self.rise_offset = 0.0;
        } else {
            self.phase = SplashPhase::Complete;
            self.rise_offset = 0.0;
        }
    }

    /// Skip to completion (visitor pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_rising() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Rise);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_rise_starts_below_and_descends_offset() {
        let mut state = SplashState::new();
        state.update_at(Duration::ZERO, 50);
        assert_eq!(state.rise_offset, 10.0);

        state.update_at(Duration::from_millis(300), 50);
        assert_eq!(state.phase, SplashPhase::Rise);
        assert!(state.rise_offset > 0.0 && state.rise_offset < 10.0);
    }

    #[test]
    fn test_hold_after_rise() {
        let mut state = SplashState::new();
        state.update_at(Duration::from_millis(700), 40);
        assert_eq!(state.phase, SplashPhase::Hold);
        assert_eq!(state.rise_offset, 0.0);
    }

    #[test]
    fn test_complete_after_hold() {
        let mut state = SplashState::new();
        state.update_at(Duration::from_millis(2200), 40);
        assert!(state.is_complete());
    }

    #[test]
    fn test_skip_is_final() {
        let mut state = SplashState::new();
        state.skip();
        state.update_at(Duration::ZERO, 40);
        assert!(state.is_complete());
    }

    #[test]
    fn test_update_immediately_after_creation() {
        let mut state = SplashState::new();
        state.update(24);
        assert_eq!(state.phase, SplashPhase::Rise);
    }
}
