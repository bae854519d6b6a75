//! Per-card turn timer.
//!
//! Either a countdown (default 60 s, adjustable in 10 s steps while stopped,
//! never below 10 s) or a stopwatch counting up. The host drives it by
//! calling [`GameTimer::tick`] once a second; the timer itself never sleeps.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Countdown,
    Stopwatch,
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Timer is stopped; nothing changed.
    Idle,
    /// Time moved by one second.
    Running,
    /// Countdown reached zero on this tick and stopped itself.
    Expired,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    mode: TimerMode,
    countdown_from: u32,
    seconds: u32,
    running: bool,
}

impl GameTimer {
    pub const DEFAULT_SECONDS: u32 = 60;
    pub const STEP_SECONDS: u32 = 10;
    pub const MIN_SECONDS: u32 = 10;

    #[must_use]
    pub fn countdown(seconds: u32) -> Self {
        let from = seconds.max(Self::MIN_SECONDS);
        Self {
            mode: TimerMode::Countdown,
            countdown_from: from,
            seconds: from,
            running: false,
        }
    }

    #[must_use]
    pub fn stopwatch() -> Self {
        Self {
            mode: TimerMode::Stopwatch,
            countdown_from: Self::DEFAULT_SECONDS,
            seconds: 0,
            running: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Countdown sitting at zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.mode == TimerMode::Countdown && self.seconds == 0
    }

    /// Switch mode. Stops the timer and resets the display.
    pub fn set_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// Start or pause. An expired countdown won't start until reset.
    pub fn toggle(&mut self) {
        if !self.running && self.is_expired() {
            return;
        }
        self.running = !self.running;
    }

    /// Stop and go back to the configured starting value.
    pub fn reset(&mut self) {
        self.running = false;
        self.seconds = match self.mode {
            TimerMode::Countdown => self.countdown_from,
            TimerMode::Stopwatch => 0,
        };
    }

    /// Nudge the countdown by `steps` × 10 s. Only while stopped.
    ///
    /// The configured start is unchanged, so `reset` undoes adjustments.
    pub fn adjust(&mut self, steps: i32) {
        if self.mode != TimerMode::Countdown || self.running {
            return;
        }
        let delta = i64::from(steps) * i64::from(Self::STEP_SECONDS);
        let next = (i64::from(self.seconds) + delta).clamp(i64::from(Self::MIN_SECONDS), i64::from(u32::MAX));
        self.seconds = next as u32;
    }

    /// Advance one second.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        match self.mode {
            TimerMode::Stopwatch => {
                self.seconds = self.seconds.saturating_add(1);
                Tick::Running
            }
            TimerMode::Countdown => {
                self.seconds = self.seconds.saturating_sub(1);
                if self.seconds == 0 {
                    self.running = false;
                    Tick::Expired
                } else {
                    Tick::Running
                }
            }
        }
    }

    /// `m:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

impl Default for GameTimer {
    fn default() -> Self {
        Self::countdown(Self::DEFAULT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_expires_and_stops() {
        let mut timer = GameTimer::countdown(10);
        timer.toggle();

        for _ in 0..9 {
            assert_eq!(timer.tick(), Tick::Running);
        }
        assert_eq!(timer.tick(), Tick::Expired);
        assert!(!timer.is_running());
        assert!(timer.is_expired());
        assert_eq!(timer.tick(), Tick::Idle);

        timer.toggle();
        assert!(!timer.is_running());
        timer.reset();
        assert_eq!(timer.seconds(), 10);
    }

    #[test]
    fn test_stopwatch_counts_up() {
        let mut timer = GameTimer::stopwatch();
        assert_eq!(timer.tick(), Tick::Idle);
        timer.toggle();
        for _ in 0..75 {
            timer.tick();
        }
        assert_eq!(timer.display(), "1:15");
    }

    #[test]
    fn test_adjust_only_when_stopped() {
        let mut timer = GameTimer::default();
        timer.adjust(2);
        assert_eq!(timer.seconds(), 80);
        timer.adjust(-20);
        assert_eq!(timer.seconds(), GameTimer::MIN_SECONDS);

        timer.toggle();
        timer.adjust(3);
        assert_eq!(timer.seconds(), GameTimer::MIN_SECONDS);
    }

    #[test]
    fn test_reset_discards_adjustments() {
        let mut timer = GameTimer::default();
        timer.adjust(3);
        assert_eq!(timer.display(), "1:30");

        timer.reset();
        assert_eq!(timer.seconds(), GameTimer::DEFAULT_SECONDS);

        let mut timer = GameTimer::countdown(20);
        timer.adjust(-1);
        timer.toggle();
        timer.tick();
        timer.reset();
        assert_eq!(timer.seconds(), 20);
    }

    #[test]
    fn test_mode_switch_resets() {
        let mut timer = GameTimer::default();
        timer.toggle();
        timer.tick();
        timer.set_mode(TimerMode::Stopwatch);
        assert_eq!(timer.seconds(), 0);
        assert!(!timer.is_running());

        timer.set_mode(TimerMode::Countdown);
        assert_eq!(timer.display(), "1:00");
    }

    #[test]
    fn test_countdown_floor() {
        assert_eq!(GameTimer::countdown(3).seconds(), 10);
    }
}
