// Integration tests for the visualizer session

use sortty::array::{is_sorted, shuffled_array, values_of};
use sortty::config::VisualizerConfig;
use sortty::constants::{COMPACT_MAX_ELEMENTS, MAX_ELEMENTS, MIN_ELEMENTS};
use sortty::headless::run_headless;
use sortty::playback::{Command, TransportPhase};
use sortty::session::Session;
use sortty::sorting::{Algorithm, SortError};
use std::time::Duration;

fn config(algorithm: Option<Algorithm>, elements: usize, seed: u64) -> VisualizerConfig {
    VisualizerConfig {
        algorithm,
        elements,
        seed,
        ..VisualizerConfig::default()
    }
}

#[test]
fn test_no_algorithm_shows_initial_array() {
    let session = Session::new(config(None, 10, 1)).expect("Session creation failed");
    assert!(session.sequence().is_none());
    assert_eq!(session.step_limit(), 0);

    let snapshot = session.display_snapshot();
    assert_eq!(snapshot.len(), 10);
    assert_eq!(&*snapshot, session.initial_array());

    let mut values = values_of(&snapshot);
    values.sort_unstable();
    assert_eq!(values, (1..=10).collect::<Vec<u32>>());
}

#[test]
fn test_same_seed_same_arrays() {
    let mut a = Session::new(config(Some(Algorithm::Bubble), 15, 42)).expect("Session creation failed");
    let mut b = Session::new(config(Some(Algorithm::Bubble), 15, 42)).expect("Session creation failed");
    assert_eq!(a.initial_array(), b.initial_array());
    assert_eq!(a.sequence(), b.sequence());

    for _ in 0..3 {
        a.toggle_shuffle().expect("Shuffle failed");
        b.toggle_shuffle().expect("Shuffle failed");
        assert_eq!(a.initial_array(), b.initial_array());
        assert_eq!(a.seed(), b.seed());
    }
}

#[test]
fn test_shuffle_matches_seeded_array() {
    let session = Session::new(config(None, 12, 9)).expect("Session creation failed");
    let expected = shuffled_array(12, session.seed());
    assert_eq!(session.initial_array(), expected.as_slice());
}

#[test]
fn test_toggle_shuffle_flips_flag_and_rebuilds() {
    let mut session = Session::new(config(Some(Algorithm::Insertion), 20, 7)).expect("Session creation failed");
    let before = session.initial_array().to_vec();
    assert!(!session.shuffle_enabled());

    session.toggle_shuffle().expect("Shuffle failed");
    assert!(session.shuffle_enabled());
    assert_ne!(session.initial_array(), before.as_slice());

    let first = session.sequence().and_then(|s| s.first()).expect("No sequence");
    assert_eq!(&*first.snapshot, session.initial_array());

    session.toggle_shuffle().expect("Shuffle failed");
    assert!(!session.shuffle_enabled());
}

#[test]
fn test_unsupported_algorithm_keeps_sequence() {
    let mut session = Session::new(config(Some(Algorithm::Merge), 10, 3)).expect("Session creation failed");
    let before = session.sequence().cloned();

    let result = session.set_algorithm("stooge");
    assert!(matches!(result, Err(SortError::UnsupportedAlgorithm { .. })));
    assert_eq!(session.algorithm(), Some(Algorithm::Merge));
    assert_eq!(session.sequence().cloned(), before);

    session.set_algorithm("heap").expect("Valid algorithm");
    assert_eq!(session.algorithm(), Some(Algorithm::Heap));
}

#[test]
fn test_element_count_is_clamped() {
    let mut session = Session::new(config(Some(Algorithm::Selection), 10, 3)).expect("Session creation failed");
    assert_eq!(session.set_element_count(100).expect("Resize failed"), MAX_ELEMENTS);
    assert_eq!(session.initial_array().len(), MAX_ELEMENTS);
    assert_eq!(session.set_element_count(0).expect("Resize failed"), MIN_ELEMENTS);
    assert_eq!(session.element_count(), MIN_ELEMENTS);

    let compact = VisualizerConfig {
        compact: true,
        ..config(None, 10, 3)
    };
    let mut session = Session::new(compact).expect("Session creation failed");
    assert_eq!(session.set_element_count(35).expect("Resize failed"), COMPACT_MAX_ELEMENTS);
}

#[test]
fn test_config_change_mid_playback_resets() {
    let mut session = Session::new(config(Some(Algorithm::Quick), 12, 11)).expect("Session creation failed");
    session.dispatch(Command::Play).expect("Play failed");
    for _ in 0..4 {
        session.tick(Duration::from_secs(1));
    }
    assert!(session.state().current_step > 0);

    session.set_element_count(13).expect("Resize failed");
    let state = session.state();
    assert_eq!(state.phase, TransportPhase::Idle);
    assert_eq!(state.current_step, 0);
    assert_eq!(state.desired_step, 0);
}

#[test]
fn test_frame_limit_failure_keeps_previous_state() {
    let limited = VisualizerConfig {
        frame_limit: 200,
        ..config(Some(Algorithm::Bubble), 5, 1)
    };
    let mut session = Session::new(limited).expect("Session creation failed");
    let before = session.initial_array().to_vec();

    let result = session.set_element_count(35);
    assert!(matches!(result, Err(SortError::FrameLimitExceeded { limit: 200 })));
    assert_eq!(session.element_count(), 5);
    assert_eq!(session.initial_array(), before.as_slice());
}

#[test]
fn test_speed_changes_go_through_controller() {
    let mut session = Session::new(config(Some(Algorithm::Bubble), 8, 2)).expect("Session creation failed");
    session.set_speed(4).expect("Valid tier");
    assert_eq!(session.speed().tier(), 4);
    assert_eq!(session.config().speed.tier(), 4);
    assert!(session.set_speed(7).is_err());
    assert_eq!(session.speed().tier(), 4);
}

#[test]
fn test_every_seed_gives_nonempty_sequence() {
    for seed in 0..20 {
        for algo in Algorithm::ALL {
            let session = Session::new(config(Some(algo), MIN_ELEMENTS, seed)).expect("Session creation failed");
            assert!(session.step_limit() > 0);
        }
    }
}

#[test]
fn test_headless_prints_every_frame() {
    let mut session = Session::new(config(Some(Algorithm::Bubble), 6, 5)).expect("Session creation failed");
    let limit = session.step_limit();

    let mut out = Vec::new();
    let written = run_headless(&mut session, &mut out).expect("Headless run failed");
    assert_eq!(written, limit + 1);

    let text = String::from_utf8(out).expect("Output is not UTF-8");
    assert!(text.lines().next().is_some_and(|l| l.contains("initial")));
    assert!(text.contains("finished: phase=paused"));

    assert_eq!(session.state().phase, TransportPhase::Paused);
    assert!(is_sorted(&session.display_snapshot()));
}

#[test]
fn test_headless_rerun_stays_at_end() {
    let mut session = Session::new(config(Some(Algorithm::Insertion), 7, 9)).expect("Session creation failed");
    let limit = session.step_limit();
    run_headless(&mut session, &mut Vec::new()).expect("Headless run failed");

    let mut out = Vec::new();
    let written = run_headless(&mut session, &mut out).expect("Second headless run failed");
    assert_eq!(written, 1);

    let text = String::from_utf8(out).expect("Output is not UTF-8");
    assert!(text.contains(&format!("finished: phase=paused step={}/{}", limit, limit)));
    assert_eq!(session.state().current_step, limit);
}
