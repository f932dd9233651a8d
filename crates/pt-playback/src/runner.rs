//! Blocking tick loop.

use crate::controller::{Frame, PlaybackController};
use crate::pacer::Pacer;
use std::sync::mpsc::Sender;

/// Drive the controller until playback finishes or the frame receiver hangs
/// up. Returns the number of position-advancing frames emitted.
///
/// Single logical thread: the pacer is the only suspension point, and
/// commands are consumed inside `tick`, never concurrently with it.
pub fn run_playback(
    mut controller: PlaybackController,
    frame_tx: Sender<Frame>,
    pacer: &mut dyn Pacer,
) -> usize {
    let mut advanced = 0;
    loop {
        pacer.wait(controller.rate_tps());
        match controller.tick() {
            Some(frame) => {
                let was_running = !frame.paused;
                if frame_tx.send(frame).is_err() {
                    // Renderer is gone; nothing left to emit to.
                    tracing::debug!("frame receiver dropped, stopping playback");
                    break;
                }
                if was_running {
                    advanced += 1;
                }
            }
            None => break,
        }
    }
    advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{PlaybackController, PlaybackOptions};
    use crate::pacer::NoopPacer;
    use pt_core::Vec3;
    use pt_model::TrajectoryModel;
    use pt_trap::{rb85, titan, InitialState};
    use std::sync::mpsc::channel;

    fn small_controller() -> PlaybackController {
        let initial =
            InitialState::new(Vec3::new(1e-3, 1e-3, 1e-3), Vec3::new(300.0, 400.0, 50.0));
        let model = TrajectoryModel::new(titan(), rb85(), initial).unwrap();
        let options = PlaybackOptions {
            step_count: 50,
            start_paused: false,
            ..PlaybackOptions::default()
        };
        PlaybackController::new(model, options).unwrap().0
    }

    #[test]
    fn runs_to_completion_and_counts_frames() {
        let (tx, rx) = channel();
        let emitted = run_playback(small_controller(), tx, &mut NoopPacer);
        assert_eq!(emitted, 50);
        let frames: Vec<_> = rx.iter().collect();
        assert_eq!(frames.len(), 50);
        assert_eq!(frames[0].step, 0);
        assert_eq!(frames.last().unwrap().step, 49);
    }

    #[test]
    fn stops_when_receiver_hangs_up() {
        let (tx, rx) = channel();
        drop(rx);
        let emitted = run_playback(small_controller(), tx, &mut NoopPacer);
        // The first send already fails, so no frame counts as delivered.
        assert_eq!(emitted, 0);
    }
}
