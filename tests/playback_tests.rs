// Integration tests for the playback controller

use sortty::array::{elements_from_values, is_sorted, shuffled_array, values_of};
use sortty::playback::{Command, PlaybackController, SpeedTier, TransportPhase};
use sortty::snapshot::FrameSequence;
use sortty::sorting::{generate, Algorithm, SortError};
use std::time::Duration;

fn bubble_sequence() -> FrameSequence {
    let initial = elements_from_values(&[5, 3, 4, 1, 2]);
    generate(Algorithm::Bubble, &initial).expect("Generation failed")
}

fn loaded() -> PlaybackController {
    PlaybackController::with_sequence(bubble_sequence())
}

/// Tick until playback leaves the Playing phase
fn run_until_paused(controller: &mut PlaybackController) -> Vec<usize> {
    let interval = controller.speed().interval();
    let mut steps = Vec::new();
    for _ in 0..10_000 {
        if !controller.state().is_playing() {
            break;
        }
        steps.push(controller.tick(interval).current_step);
    }
    steps
}

#[test]
fn test_initial_state_is_idle() {
    let controller = PlaybackController::new();
    let state = controller.state();
    assert_eq!(state.phase, TransportPhase::Idle);
    assert_eq!(state.current_step, 0);
    assert_eq!(state.desired_step, 0);
    assert_eq!(state.logical_step, 0);
    assert_eq!(state.speed, SpeedTier::default());
    assert_eq!(controller.step_limit(), 0);
    assert!(controller.snapshot().is_none());
}

#[test]
fn test_play_without_sequence_is_noop() {
    let mut controller = PlaybackController::new();
    controller.play();
    assert_eq!(controller.phase(), TransportPhase::Idle);
    assert!(controller.dispatch(Command::Play).is_ok());
    assert_eq!(controller.phase(), TransportPhase::Idle);
}

#[test]
fn test_play_degenerate_sequence_is_noop() {
    let sequence = generate(Algorithm::Quick, &elements_from_values(&[1])).expect("Generation failed");
    let mut controller = PlaybackController::with_sequence(sequence);
    controller.play();
    assert_eq!(controller.phase(), TransportPhase::Idle);
}

#[test]
fn test_bubble_example_plays_to_sorted_end() {
    let mut controller = loaded();
    let limit = controller.step_limit();

    controller.set_desired_step(0);
    controller.play();
    controller.set_desired_step(limit);
    assert_eq!(controller.phase(), TransportPhase::Playing);

    run_until_paused(&mut controller);

    let state = controller.state();
    assert_eq!(state.phase, TransportPhase::Paused);
    assert_eq!(state.current_step, limit);
    assert_eq!(state.logical_step, limit);
    let snapshot = controller.snapshot().expect("No snapshot");
    assert_eq!(values_of(&snapshot), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_end_reached_at_every_speed() {
    for tier in 0..5 {
        let mut controller = loaded();
        controller.set_speed(tier).expect("Valid tier");
        controller.play();
        run_until_paused(&mut controller);
        assert_eq!(controller.current_step(), controller.step_limit());
        assert_eq!(controller.phase(), TransportPhase::Paused);
    }
}

#[test]
fn test_first_tick_after_play_advances() {
    let mut controller = loaded();
    controller.play();
    assert_eq!(controller.tick(Duration::ZERO).current_step, 1);
}

#[test]
fn test_tick_waits_for_interval() {
    let mut controller = loaded();
    let interval = controller.speed().interval();
    controller.play();
    controller.tick(Duration::ZERO);

    let short = interval - Duration::from_millis(1);
    assert_eq!(controller.tick(short).current_step, 1);
    assert_eq!(controller.tick(Duration::from_millis(1)).current_step, 2);
}

#[test]
fn test_long_stall_advances_one_frame() {
    let mut controller = loaded();
    controller.play();
    controller.tick(Duration::ZERO);

    assert_eq!(controller.tick(Duration::from_secs(60)).current_step, 2);
    // Leftover time is not banked as a burst
    assert_eq!(controller.tick(Duration::ZERO).current_step, 2);
}

#[test]
fn test_scrub_backward_while_playing_rewinds_one_step_at_a_time() {
    let mut controller = loaded();
    let interval = controller.speed().interval();
    controller.play();
    for _ in 0..10 {
        controller.tick(interval);
    }
    assert_eq!(controller.current_step(), 10);

    controller.set_desired_step(3);
    assert_eq!(controller.phase(), TransportPhase::Playing);
    assert_eq!(controller.current_step(), 10);

    let steps = run_until_paused(&mut controller);
    assert_eq!(steps, vec![9, 8, 7, 6, 5, 4, 3]);
    assert_eq!(controller.phase(), TransportPhase::Paused);
    assert_eq!(controller.logical_step(), 3);
}

#[test]
fn test_scrub_then_play_stops_at_target() {
    let mut controller = loaded();
    controller.set_desired_step(4);
    assert_eq!(controller.phase(), TransportPhase::Idle);
    assert_eq!(controller.current_step(), 0);

    controller.play();
    let steps = run_until_paused(&mut controller);
    assert_eq!(steps, vec![1, 2, 3, 4]);
    assert_eq!(controller.state().desired_step, 4);
}

#[test]
fn test_play_from_last_frame_is_noop() {
    let mut controller = loaded();
    let limit = controller.step_limit();
    controller.play();
    run_until_paused(&mut controller);

    // Nothing left to play forward
    controller.play();
    assert_eq!(controller.phase(), TransportPhase::Paused);

    // A backward target does not restart playback from the last frame
    controller.set_desired_step(limit - 2);
    controller.play();
    assert_eq!(controller.phase(), TransportPhase::Paused);
    assert_eq!(controller.current_step(), limit);
    assert_eq!(controller.tick(Duration::from_secs(1)).current_step, limit);

    // Stop returns to the start, from where a scrub plays again
    controller.stop();
    controller.set_desired_step(limit - 2);
    controller.play();
    run_until_paused(&mut controller);
    assert_eq!(controller.current_step(), limit - 2);
}

#[test]
fn test_set_desired_step_clamps() {
    let mut controller = loaded();
    controller.set_desired_step(10_000);
    assert_eq!(controller.desired_step(), controller.step_limit());

    let mut empty = PlaybackController::new();
    empty.set_desired_step(5);
    assert_eq!(empty.desired_step(), 0);
}

#[test]
fn test_invalid_speed_is_rejected() {
    let mut controller = loaded();
    controller.set_speed(4).expect("Valid tier");
    assert_eq!(
        controller.set_speed(5),
        Err(SortError::InvalidSpeed { tier: 5, max: 4 })
    );
    assert_eq!(controller.speed(), SpeedTier::FAST);
    assert!(controller.dispatch(Command::SetSpeed(200)).is_err());
    assert_eq!(controller.speed(), SpeedTier::FAST);
}

#[test]
fn test_pause_only_from_playing() {
    let mut controller = loaded();
    controller.pause();
    assert_eq!(controller.phase(), TransportPhase::Idle);

    controller.play();
    controller.tick(Duration::ZERO);
    controller.pause();
    assert_eq!(controller.phase(), TransportPhase::Paused);

    let step = controller.current_step();
    controller.tick(Duration::from_secs(5));
    assert_eq!(controller.current_step(), step);

    // Resume keeps running toward the end
    controller.play();
    assert_eq!(controller.desired_step(), controller.step_limit());
}

#[test]
fn test_stop_resets_and_is_idempotent() {
    let mut controller = loaded();
    controller.play();
    for _ in 0..5 {
        controller.tick(Duration::from_secs(1));
    }
    assert!(controller.current_step() > 0);

    for _ in 0..2 {
        controller.stop();
        let state = controller.state();
        assert_eq!(state.phase, TransportPhase::Idle);
        assert_eq!(state.current_step, 0);
        assert_eq!(state.desired_step, 0);
        assert_eq!(state.logical_step, 0);
    }

    // A tick after stop does nothing
    controller.tick(Duration::from_secs(1));
    assert_eq!(controller.current_step(), 0);
}

#[test]
fn test_stop_keeps_speed() {
    let mut controller = loaded();
    controller.set_speed(0).expect("Valid tier");
    controller.stop();
    assert_eq!(controller.speed(), SpeedTier::SLOW);
}

#[test]
fn test_load_mid_playback_resets() {
    let mut controller = loaded();
    controller.play();
    controller.tick(Duration::ZERO);
    controller.tick(Duration::from_secs(1));

    let sequence = generate(Algorithm::Heap, &shuffled_array(8, 3)).expect("Generation failed");
    controller.load(sequence);

    let state = controller.state();
    assert_eq!(state.phase, TransportPhase::Idle);
    assert_eq!(state.current_step, 0);
    assert_eq!(state.desired_step, 0);
}

#[test]
fn test_unload_returns_to_idle() {
    let mut controller = loaded();
    controller.play();
    controller.unload();
    assert_eq!(controller.phase(), TransportPhase::Idle);
    assert_eq!(controller.step_limit(), 0);
    controller.play();
    assert_eq!(controller.phase(), TransportPhase::Idle);
}

#[test]
fn test_observers_receive_updates() {
    let mut controller = loaded();
    let updates = controller.subscribe();

    let first = updates.try_recv().expect("Initial update");
    assert_eq!(first.state.phase, TransportPhase::Idle);
    assert_eq!(first.step_limit, controller.step_limit());

    controller.play();
    controller.tick(Duration::ZERO);
    controller.stop();

    let phases: Vec<TransportPhase> = updates.try_iter().map(|u| u.state.phase).collect();
    assert_eq!(
        phases,
        vec![
            TransportPhase::Playing,
            TransportPhase::Playing,
            TransportPhase::Stopped,
            TransportPhase::Idle,
        ]
    );
}

#[test]
fn test_published_snapshot_follows_current_step() {
    let mut controller = loaded();
    let updates = controller.subscribe();
    controller.play();
    run_until_paused(&mut controller);

    let last = updates.try_iter().last().expect("No updates");
    assert_eq!(last.state.phase, TransportPhase::Paused);
    assert_eq!(last.state.current_step, last.step_limit);
    assert!(is_sorted(&last.snapshot.expect("No snapshot")));
}

#[test]
fn test_dropped_observer_is_pruned() {
    let mut controller = loaded();
    let updates = controller.subscribe();
    drop(updates);
    controller.play();
    controller.tick(Duration::ZERO);
    assert_eq!(controller.current_step(), 1);
}
