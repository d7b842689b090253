// Host-side tests for constants, default configuration and small page data.

use portfolio_web::config::{CyclerConfig, RigConfig, SiteConfig};
use portfolio_web::constants::*;
use portfolio_web::snippet::{self, DEVELOPER_SNIPPET, EDITOR_TITLE};
use portfolio_web::theme::Theme;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(TYPING_SPEED_MS > 0);
    assert!(TYPING_DELAY_MS > TYPING_SPEED_MS);
    assert!(DRAG_SENSITIVITY > 0.0);
    assert!(TILT_LIMIT > 0.0 && TILT_LIMIT < std::f32::consts::FRAC_PI_2);
    assert!(ROTATION_DAMPING > 0.0 && ROTATION_DAMPING <= 1.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
    assert!(CYLINDER_SEGMENTS >= 3);
}

#[test]
fn typing_starts_after_the_loader_is_gone() {
    let cfg = SiteConfig::default();
    assert!(cfg.typing_start_delay_ms > cfg.loader_duration_ms);
    assert_eq!(cfg.typing_start_delay_ms, 1100);
    assert_eq!(cfg.rig_start_delay_ms, 200);
}

#[test]
fn default_phrases_are_non_empty() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.phrases.len(), 3);
    assert!(cfg.phrases.iter().all(|p| !p.is_empty()));
    assert_eq!(cfg.phrases[0], "Full-Stack Web Developer");
}

#[test]
fn erasing_runs_at_twice_the_typing_rate() {
    let c = CyclerConfig::default();
    assert_eq!(c.typing_speed, Duration::from_millis(100));
    assert_eq!(c.typing_delay, Duration::from_millis(2000));
    assert_eq!(c.erase_interval(), Duration::from_millis(50));
    assert_eq!(c.erase_pause, Duration::ZERO);
}

#[test]
fn rig_defaults_keep_orbit_only_behavior() {
    let r = RigConfig::default();
    assert!(!r.vertical_tilt_enabled);
    assert!(!r.touch_tilt_enabled);
    assert!(!r.frame_rate_independent);
    assert_eq!(r.drag_sensitivity, 0.01);
    assert_eq!(r.tilt_limit, 0.5);
}

#[test]
fn renderer_missing_message_is_visible_markup() {
    assert!(!RENDERER_MISSING_HTML.trim().is_empty());
    assert!(RENDERER_MISSING_HTML.contains('<'));
}

#[test]
fn theme_parses_stored_preference() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("garbage")), Theme::Dark);
}

#[test]
fn theme_toggle_flips_and_persists_as_string() {
    let t = Theme::default();
    assert_eq!(t.toggled(), Theme::Light);
    assert_eq!(t.toggled().toggled(), t);
    assert_eq!(Theme::from_stored(Some(Theme::Light.as_str())), Theme::Light);
    assert_eq!(Theme::from_light_mode(true), Theme::Light);
    assert_eq!(Theme::from_light_mode(false), Theme::Dark);
}

#[test]
fn editor_snippet_reads_as_a_java_class() {
    assert_eq!(EDITOR_TITLE, "Developer.java");
    let text = snippet::plain_text(DEVELOPER_SNIPPET);
    assert!(text.starts_with("public class Developer {"));
    assert!(text.contains("\"Dandu Suresh\";"));
    assert!(text.ends_with('}'));
}

#[test]
fn snippet_marks_exactly_one_dynamic_role() {
    let ids: Vec<_> = DEVELOPER_SNIPPET.iter().filter_map(|t| t.id).collect();
    assert_eq!(ids, vec!["dynamic-role"]);
}

#[test]
fn default_rig_config_validates() {
    assert!(RigConfig::default().validate().is_ok());
    let edge = RigConfig {
        damping: 1.0,
        tilt_limit: 0.0,
        ..RigConfig::default()
    };
    assert!(edge.validate().is_ok());
    let negative_damping = RigConfig {
        damping: -0.1,
        ..RigConfig::default()
    };
    assert!(negative_damping.validate().is_err());
}
