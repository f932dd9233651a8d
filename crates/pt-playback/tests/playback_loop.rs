//! Integration test: full playback loop with a worker thread, a frame
//! channel and asynchronous commands, the way a frontend wires it up.

use pt_core::Vec3;
use pt_model::TrajectoryModel;
use pt_playback::{
    run_playback, InputMap, NoopPacer, PlaybackCommand, PlaybackController, PlaybackOptions,
};
use pt_trap::{rb85, titan, InitialState};
use std::sync::mpsc::channel;
use std::thread;

fn model() -> TrajectoryModel {
    let initial = InitialState::new(Vec3::new(1e-3, 1e-3, 1e-3), Vec3::new(300.0, 400.0, 50.0));
    TrajectoryModel::new(titan(), rb85(), initial).unwrap()
}

#[test]
fn worker_thread_runs_playback_to_completion() {
    let options = PlaybackOptions {
        step_count: 200,
        start_paused: false,
        ..PlaybackOptions::default()
    };
    let (controller, commands) = PlaybackController::new(model(), options).unwrap();

    // Commands enqueued before the first tick are drained at the tick
    // boundary, so the very first frame already carries the new rate.
    commands.increase_rate(150.0).unwrap();
    commands.increase_rate(150.0).unwrap();

    let (frame_tx, frame_rx) = channel();
    let worker = thread::spawn(move || run_playback(controller, frame_tx, &mut NoopPacer));

    let frames: Vec<_> = frame_rx.iter().collect();
    let advanced = worker.join().unwrap();

    assert_eq!(advanced, 200);
    assert_eq!(frames.len(), 200);
    assert_eq!(frames[0].rate_tps, 1800.0);
    assert_eq!(frames[0].time_s, 0.0);
    // Simulated time is step * dt throughout.
    let dt = 5e-9;
    for (n, frame) in frames.iter().enumerate() {
        assert_eq!(frame.step, n);
        assert!((frame.time_s - n as f64 * dt).abs() < 1e-18);
        assert!(!frame.paused);
    }
}

#[test]
fn input_map_feeds_command_queue() {
    let options = PlaybackOptions {
        step_count: 10,
        start_paused: true,
        ..PlaybackOptions::default()
    };
    let (mut controller, commands) = PlaybackController::new(model(), options).unwrap();
    let map = InputMap::default();

    // "Key presses" travel key -> command -> queue, as the input
    // collaborator would deliver them.
    for key in ["right", "right", "left", "p"] {
        if let Some(command) = map.command_for(key) {
            commands.send(command).unwrap();
        }
    }

    let frame = controller.tick().unwrap();
    // Net rate: 1500 + 150 + 150 - 150; pause toggled off, so we advanced.
    assert_eq!(frame.rate_tps, 1650.0);
    assert!(!frame.paused);
    assert_eq!(frame.step, 0);
}

#[test]
fn display_scale_is_applied_to_emitted_positions() {
    let options = PlaybackOptions {
        step_count: 5,
        start_paused: false,
        display_scale: 1e5,
        ..PlaybackOptions::default()
    };
    let (mut controller, _commands) = PlaybackController::new(model(), options).unwrap();
    let frame = controller.tick().unwrap();
    // Initial position is (1,1,1) mm; scaled by 1e5 that is (100,100,100).
    for i in 0..3 {
        assert!((frame.position[i] - 100.0).abs() < 1e-6);
    }
}

#[test]
fn toggle_while_running_freezes_emitted_position() {
    let options = PlaybackOptions {
        step_count: 100,
        start_paused: false,
        ..PlaybackOptions::default()
    };
    let (mut controller, commands) = PlaybackController::new(model(), options).unwrap();

    for _ in 0..7 {
        controller.tick().unwrap();
    }
    commands.send(PlaybackCommand::TogglePause).unwrap();

    let frozen = controller.tick().unwrap();
    assert!(frozen.paused);
    for _ in 0..4 {
        let again = controller.tick().unwrap();
        assert_eq!(again.position, frozen.position);
        assert_eq!(again.time_s, frozen.time_s);
    }
}
