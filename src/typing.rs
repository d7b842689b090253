//! Typing/erasing phrase cycler.
//!
//! An explicit state machine advanced one transition at a time. The browser
//! driver (`ticker.rs`) turns each returned delay into a single pending
//! timeout; tests drive it with simulated time through [`TextCycler::advance`].

use crate::config::CyclerConfig;
use crate::error::SiteError;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAfterType,
    Erasing,
    PausedAfterErase,
}

/// Result of a single transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Time until the next transition is due.
    pub delay: Duration,
    /// Whether the displayed text changed during this transition.
    pub text_changed: bool,
}

#[derive(Debug)]
pub struct TextCycler {
    phrases: Vec<Vec<char>>,
    config: CyclerConfig,
    index: usize,
    phase: Phase,
    shown: usize,
    running: bool,
    // Time until the next transition is due, consumed by `advance`
    until_next: Duration,
}

impl TextCycler {
    pub fn new(phrases: Vec<String>, config: CyclerConfig) -> Result<Self, SiteError> {
        if phrases.is_empty() {
            return Err(SiteError::InvalidConfig("phrase list is empty".into()));
        }
        if config.typing_speed.is_zero() || config.typing_delay.is_zero() {
            return Err(SiteError::InvalidConfig(
                "typing speed and typing delay must be non-zero".into(),
            ));
        }
        Ok(Self {
            phrases: phrases.iter().map(|p| p.chars().collect()).collect(),
            config,
            index: 0,
            phase: Phase::Typing,
            shown: 0,
            running: false,
            until_next: Duration::ZERO,
        })
    }

    /// Begin cycling from the first phrase.
    ///
    /// Returns the delay before the first [`step`](Self::step), or `None` when
    /// a cycle is already running; a second caller must not start its own
    /// timer chain.
    pub fn start(&mut self) -> Option<Duration> {
        if self.running {
            log::warn!("[typing] start ignored: cycle already running");
            return None;
        }
        self.running = true;
        self.index = 0;
        self.phase = Phase::Typing;
        self.shown = 0;
        self.until_next = Duration::ZERO;
        Some(Duration::ZERO)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Currently displayed prefix of the current phrase.
    pub fn text(&self) -> String {
        self.phrases[self.index][..self.shown].iter().collect()
    }

    /// Perform exactly one transition. `None` while stopped.
    pub fn step(&mut self) -> Option<Step> {
        if !self.running {
            return None;
        }
        let len = self.phrases[self.index].len();
        let step = match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                Step {
                    delay: self.config.typing_speed,
                    text_changed: true,
                }
            }
            Phase::Typing => {
                self.phase = Phase::PausedAfterType;
                Step {
                    delay: self.config.typing_delay,
                    text_changed: false,
                }
            }
            Phase::PausedAfterType => {
                self.phase = Phase::Erasing;
                Step {
                    delay: Duration::ZERO,
                    text_changed: false,
                }
            }
            Phase::Erasing if self.shown > 0 => {
                self.shown -= 1;
                Step {
                    delay: self.config.erase_interval(),
                    text_changed: true,
                }
            }
            Phase::Erasing => {
                self.phase = Phase::PausedAfterErase;
                Step {
                    delay: self.config.erase_pause,
                    text_changed: false,
                }
            }
            Phase::PausedAfterErase => {
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                self.shown = 0;
                Step {
                    delay: Duration::ZERO,
                    text_changed: false,
                }
            }
        };
        self.until_next = step.delay;
        Some(step)
    }

    /// Run every transition due within `dt` of simulated time.
    ///
    /// Returns whether the displayed text changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut changed = false;
        let mut budget = dt;
        while self.running && self.until_next <= budget {
            budget -= self.until_next;
            match self.step() {
                Some(s) => changed |= s.text_changed,
                None => break,
            }
        }
        if self.running {
            self.until_next -= budget;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(phrases: &[&str]) -> TextCycler {
        TextCycler::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            CyclerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn not_running_until_started() {
        let mut c = cycler(&["ab"]);
        assert!(c.step().is_none());
        assert!(!c.advance(Duration::from_secs(10)));
        assert_eq!(c.text(), "");
    }

    #[test]
    fn first_character_appears_immediately() {
        let mut c = cycler(&["abc"]);
        c.start();
        assert!(c.advance(Duration::ZERO));
        assert_eq!(c.text(), "a");
    }

    #[test]
    fn unicode_phrases_step_by_scalar_value() {
        let mut c = cycler(&["héllo"]);
        c.start();
        c.advance(Duration::from_millis(100));
        assert_eq!(c.text(), "hé");
    }
}
