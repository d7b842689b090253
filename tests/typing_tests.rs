// Host-side tests for the typing/erasing cycle, driven with simulated time.

use portfolio_web::config::{CyclerConfig, SiteConfig};
use portfolio_web::typing::{Phase, TextCycler};
use portfolio_web::SiteError;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn cycler(phrases: &[&str]) -> TextCycler {
    TextCycler::new(
        phrases.iter().map(|s| s.to_string()).collect(),
        CyclerConfig::default(),
    )
    .unwrap()
}

/// Step until the phase changes, returning how many text-changing steps ran.
fn run_phase(c: &mut TextCycler) -> usize {
    let phase = c.phase();
    let mut changes = 0;
    while c.phase() == phase {
        if c.step().unwrap().text_changed {
            changes += 1;
        }
    }
    changes
}

#[test]
fn phrase_is_fully_typed_within_speed_times_length() {
    let mut c = cycler(&["Java Developer"]);
    c.start();
    // First char at t=0, then one per 100 ms
    c.advance(ms(100 * 13));
    assert_eq!(c.text(), "Java Developer");
    assert_eq!(c.phase(), Phase::Typing);
    c.advance(ms(100));
    assert_eq!(c.phase(), Phase::PausedAfterType);
}

#[test]
fn full_text_holds_for_typing_delay_before_erasing() {
    let mut c = cycler(&["ab"]);
    c.start();
    c.advance(ms(200));
    assert_eq!(c.phase(), Phase::PausedAfterType);
    c.advance(ms(1999));
    assert_eq!(c.text(), "ab");
    assert_eq!(c.phase(), Phase::PausedAfterType);
    // Pause ends, erasing starts and drops the first char immediately
    c.advance(ms(1));
    assert_eq!(c.phase(), Phase::Erasing);
    assert_eq!(c.text(), "a");
}

#[test]
fn erasing_removes_one_character_per_half_interval() {
    let mut c = cycler(&["abcd"]);
    c.start();
    run_phase(&mut c); // typing
    run_phase(&mut c); // pause after type
    assert_eq!(c.phase(), Phase::Erasing);
    assert_eq!(c.text(), "abcd");
    let mut lens = Vec::new();
    while c.phase() == Phase::Erasing {
        let step = c.step().unwrap();
        if step.text_changed {
            assert_eq!(step.delay, ms(50));
            lens.push(c.text().chars().count());
        }
    }
    assert_eq!(lens, vec![3, 2, 1, 0]);
}

#[test]
fn typing_adds_one_character_per_step() {
    let mut c = cycler(&["hello"]);
    c.start();
    let mut seen = Vec::new();
    while c.phase() == Phase::Typing {
        if c.step().unwrap().text_changed {
            seen.push(c.text());
        }
    }
    assert_eq!(seen, vec!["h", "he", "hel", "hell", "hello"]);
}

#[test]
fn phrases_advance_in_order_and_wrap() {
    let mut c = cycler(&["a", "b", "c"]);
    c.start();
    let mut order = vec![c.index()];
    for _ in 0..4 {
        while c.phase() != Phase::PausedAfterErase {
            c.step();
        }
        c.step();
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.text(), "");
        order.push(c.index());
    }
    assert_eq!(order, vec![0, 1, 2, 0, 1]);
}

#[test]
fn single_phrase_cycles_onto_itself() {
    let mut c = cycler(&["solo"]);
    c.start();
    for _ in 0..3 {
        assert_eq!(run_phase(&mut c), 4);
        run_phase(&mut c);
        assert_eq!(run_phase(&mut c), 4);
        run_phase(&mut c);
        assert_eq!(c.index(), 0);
        assert_eq!(c.phase(), Phase::Typing);
    }
}

#[test]
fn empty_phrase_goes_straight_to_pause() {
    let mut c = cycler(&["", "x"]);
    c.start();
    let step = c.step().unwrap();
    assert!(!step.text_changed);
    assert_eq!(c.phase(), Phase::PausedAfterType);
    assert_eq!(step.delay, ms(2000));
    c.step();
    // Nothing to erase
    let step = c.step().unwrap();
    assert!(!step.text_changed);
    assert_eq!(c.phase(), Phase::PausedAfterErase);
    c.step();
    assert_eq!(c.index(), 1);
}

#[test]
fn displayed_text_is_always_a_prefix() {
    let phrases = ["Full-Stack Web Developer", "Java Developer", "Problem Solver"];
    let mut c = cycler(&phrases);
    c.start();
    for _ in 0..400 {
        c.advance(ms(37));
        assert!(phrases[c.index()].starts_with(&c.text()));
    }
}

#[test]
fn second_start_is_refused_while_running() {
    let mut c = cycler(&["ab"]);
    assert_eq!(c.start(), Some(Duration::ZERO));
    c.advance(ms(100));
    assert_eq!(c.start(), None);
    // The running cycle is untouched
    assert_eq!(c.text(), "ab");
}

#[test]
fn stop_halts_and_restart_begins_at_first_phrase() {
    let mut c = cycler(&["one", "two"]);
    c.start();
    while c.index() == 0 {
        c.step();
    }
    c.stop();
    assert!(!c.is_running());
    assert!(c.step().is_none());
    assert!(!c.advance(ms(10_000)));

    assert!(c.start().is_some());
    assert_eq!(c.index(), 0);
    assert_eq!(c.phase(), Phase::Typing);
    assert_eq!(c.text(), "");
}

#[test]
fn non_zero_erase_pause_delays_next_phrase() {
    let config = CyclerConfig {
        erase_pause: ms(500),
        ..CyclerConfig::default()
    };
    let mut c = TextCycler::new(vec!["a".into(), "b".into()], config).unwrap();
    c.start();
    while c.phase() != Phase::Erasing || !c.text().is_empty() {
        c.step();
    }
    let step = c.step().unwrap();
    assert_eq!(c.phase(), Phase::PausedAfterErase);
    assert_eq!(step.delay, ms(500));
}

#[test]
fn rejects_empty_phrase_list() {
    let err = TextCycler::new(Vec::new(), CyclerConfig::default()).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
}

#[test]
fn rejects_zero_timings() {
    for config in [
        CyclerConfig {
            typing_speed: Duration::ZERO,
            ..CyclerConfig::default()
        },
        CyclerConfig {
            typing_delay: Duration::ZERO,
            ..CyclerConfig::default()
        },
    ] {
        let res = TextCycler::new(vec!["x".into()], config);
        assert!(matches!(res, Err(SiteError::InvalidConfig(_))));
    }
}

#[test]
fn every_default_phrase_is_typed_within_speed_times_length() {
    let phrases = SiteConfig::default().phrases;
    let mut c = TextCycler::new(phrases.clone(), CyclerConfig::default()).unwrap();
    c.start();
    for (i, phrase) in phrases.iter().enumerate() {
        assert_eq!(c.index(), i);
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.text(), "");
        c.advance(ms(100 * phrase.chars().count() as u64));
        assert_eq!(&c.text(), phrase);
        // Finish the pause and erase, landing at the start of the next phrase
        while c.phase() != Phase::PausedAfterErase {
            c.step();
        }
        c.step();
    }
    assert_eq!(c.index(), 0);
}
