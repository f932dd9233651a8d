//! Describe and playback services.

use crate::compile::ScenarioRuntime;
use crate::error::AppResult;
use pt_playback::{
    run_playback, CommandSender, Frame, Pacer, PlaybackController, SleepPacer,
};
use std::sync::mpsc::{channel, Receiver};
use std::thread::{self, JoinHandle};

/// Diagnostic report for a compiled scenario.
pub fn describe_scenario(runtime: &ScenarioRuntime) -> String {
    runtime.model.report().to_string()
}

/// Playback running on a worker thread, the frontend holding the frame
/// stream and the command handle.
pub struct PlaybackWorker {
    pub frames: Receiver<Frame>,
    pub commands: CommandSender,
    handle: JoinHandle<usize>,
}

impl PlaybackWorker {
    /// Spawn the tick loop paced against the wall clock.
    pub fn start(runtime: &ScenarioRuntime) -> AppResult<Self> {
        Self::start_with_pacer(runtime, Box::new(SleepPacer::new()))
    }

    /// Spawn the tick loop with a caller-supplied pacer (tests use a
    /// non-blocking one).
    pub fn start_with_pacer(
        runtime: &ScenarioRuntime,
        mut pacer: Box<dyn Pacer + Send>,
    ) -> AppResult<Self> {
        let (controller, commands) =
            PlaybackController::new(runtime.model.clone(), runtime.playback)?;
        let (frame_tx, frames) = channel();

        tracing::info!(
            scenario = %runtime.name,
            steps = runtime.playback.step_count,
            rate = runtime.playback.initial_rate_tps,
            "starting playback"
        );
        let handle = thread::spawn(move || run_playback(controller, frame_tx, pacer.as_mut()));

        Ok(Self {
            frames,
            commands,
            handle,
        })
    }

    /// Wait for playback to finish; returns the number of advancing frames.
    pub fn join(self) -> usize {
        self.handle.join().unwrap_or(0)
    }
}
