//! Runtime configuration for the page subsystems.
//!
//! Defaults come from `constants.rs`; the page builds them once at start and
//! hands each subsystem its own copy.

use crate::constants::*;
use crate::error::SiteError;
use std::time::Duration;

/// Timing of the typing/erasing cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CyclerConfig {
    pub typing_speed: Duration,
    pub typing_delay: Duration,
    /// Hold after a phrase has been erased. Zero starts the next phrase
    /// straight away.
    pub erase_pause: Duration,
}

impl CyclerConfig {
    /// Interval between erased characters.
    pub fn erase_interval(&self) -> Duration {
        self.typing_speed / 2
    }
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(TYPING_SPEED_MS),
            typing_delay: Duration::from_millis(TYPING_DELAY_MS),
            erase_pause: Duration::from_millis(ERASE_PAUSE_MS),
        }
    }
}

/// Drag and animation tuning for the desk scene.
#[derive(Clone, Debug, PartialEq)]
pub struct RigConfig {
    pub drag_sensitivity: f32,
    pub tilt_limit: f32,
    pub damping: f32,
    pub cooler_spin_per_frame: f32,
    /// Apply the damped vertical tilt to the rig. Off: the tilt target is
    /// tracked and damped but the rig only turns about Y.
    pub vertical_tilt_enabled: bool,
    /// Let touch drags feed the vertical tilt target like mouse drags do.
    pub touch_tilt_enabled: bool,
    /// Scale damping and spin by the frame delta against a 60 Hz reference
    /// instead of applying them once per frame.
    pub frame_rate_independent: bool,
}

impl RigConfig {
    /// Reject values that would panic in the tilt clamp or make the rig
    /// diverge instead of easing toward its target.
    pub fn validate(&self) -> Result<(), SiteError> {
        if !self.tilt_limit.is_finite() || self.tilt_limit < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "tilt limit must be finite and non-negative, got {}",
                self.tilt_limit
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SiteError::InvalidConfig(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if !self.drag_sensitivity.is_finite() || !self.cooler_spin_per_frame.is_finite() {
            return Err(SiteError::InvalidConfig(
                "drag sensitivity and cooler spin must be finite".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DRAG_SENSITIVITY,
            tilt_limit: TILT_LIMIT,
            damping: ROTATION_DAMPING,
            cooler_spin_per_frame: COOLER_SPIN_PER_FRAME,
            vertical_tilt_enabled: false,
            touch_tilt_enabled: false,
            frame_rate_independent: false,
        }
    }
}

/// DOM anchors and load-sequence delays.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub phrases: Vec<String>,
    pub cycler: CyclerConfig,
    pub rig: RigConfig,

    pub loader_id: &'static str,
    pub navbar_id: &'static str,
    pub hamburger_selector: &'static str,
    pub nav_link_selector: &'static str,
    pub subtitle_selector: &'static str,
    pub theme_toggle_id: &'static str,
    pub editor_title_selector: &'static str,
    pub code_block_id: &'static str,
    pub scene_container_id: &'static str,
    pub reveal_selector: &'static str,

    pub loader_duration_ms: u32,
    pub loader_fade_ms: u32,
    pub typing_start_delay_ms: u32,
    pub rig_start_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phrases: TYPING_PHRASES.iter().map(|s| s.to_string()).collect(),
            cycler: CyclerConfig::default(),
            rig: RigConfig::default(),
            loader_id: "loader",
            navbar_id: "navbar",
            hamburger_selector: ".hamburger",
            nav_link_selector: ".nav-links a",
            subtitle_selector: ".subtitle",
            theme_toggle_id: "theme-toggle",
            editor_title_selector: ".editor-title",
            code_block_id: "code-typewriter",
            scene_container_id: "tech-canvas-container",
            reveal_selector: ".project-card, .edu-card, .timeline-item, .skills-category-card",
            loader_duration_ms: LOADER_DURATION_MS,
            loader_fade_ms: LOADER_FADE_MS,
            typing_start_delay_ms: LOADER_DURATION_MS + TYPING_START_EXTRA_MS,
            rig_start_delay_ms: RIG_START_DELAY_MS,
        }
    }
}
