// Host-side tests for page lifecycle helpers.

use portfolio_web::lifecycle::{load_already_fired, StartOnce};

#[test]
fn load_work_runs_directly_once_document_is_complete() {
    assert!(load_already_fired("complete"));
    assert!(!load_already_fired("interactive"));
    assert!(!load_already_fired("loading"));
}

#[test]
fn start_guard_admits_only_the_first_caller() {
    let guard = StartOnce::new();
    assert!(!guard.is_started());
    assert!(guard.claim());
    assert!(guard.is_started());
    // A late `load` event after a direct run must not start things twice
    assert!(!guard.claim());
    assert!(!guard.claim());
}

#[test]
fn guards_are_independent() {
    let load = StartOnce::new();
    let rig = StartOnce::default();
    assert!(load.claim());
    assert!(rig.claim());
    assert!(!load.claim());
    assert!(!rig.claim());
}
