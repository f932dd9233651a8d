//! Tick-driven playback controller.

use crate::command::PlaybackCommand;
use crate::error::{PlaybackError, PlaybackResult};
use crate::state::{PlaybackPhase, PlaybackState};
use pt_core::{Real, Vec3};
use pt_model::TrajectoryModel;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};

/// Depth of the bounded command queue. Commands arrive at human key-press
/// rates; anything beyond this is a stuck key and can be dropped.
const COMMAND_QUEUE_DEPTH: usize = 64;

/// One emission to the renderer collaborator: current simulated time,
/// display-scaled position, and the live rate/pause readout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub step: usize,
    pub time_s: Real,
    pub position: Vec3,
    pub rate_tps: Real,
    pub paused: bool,
}

/// Playback configuration. Defaults mirror the reference animation:
/// 5 ns steps, one million of them, 1500 ticks/s, starting paused, with
/// positions scaled by 1e5 for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackOptions {
    /// Simulated time per step (s).
    pub step_size_s: Real,
    /// Total step budget; playback finishes when it is exhausted.
    pub step_count: usize,
    /// Initial tick rate (ticks per second of wall time).
    pub initial_rate_tps: Real,
    /// Whether playback starts paused.
    pub start_paused: bool,
    /// Display scale applied to emitted positions.
    pub display_scale: Real,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            step_size_s: 5e-9,
            step_count: 1_000_000,
            initial_rate_tps: 1500.0,
            start_paused: true,
            display_scale: 1e5,
        }
    }
}

impl PlaybackOptions {
    fn validate(&self) -> PlaybackResult<()> {
        if !self.step_size_s.is_finite() || self.step_size_s <= 0.0 {
            return Err(PlaybackError::InvalidArg {
                what: "step size must be positive and finite",
            });
        }
        if self.step_count == 0 {
            return Err(PlaybackError::InvalidArg {
                what: "step count must be positive",
            });
        }
        if !self.initial_rate_tps.is_finite() || self.initial_rate_tps <= 0.0 {
            return Err(PlaybackError::InvalidArg {
                what: "initial rate must be positive and finite",
            });
        }
        if !self.display_scale.is_finite() || self.display_scale <= 0.0 {
            return Err(PlaybackError::InvalidArg {
                what: "display scale must be positive and finite",
            });
        }
        Ok(())
    }
}

/// Clonable handle the input collaborator uses to enqueue commands.
///
/// Validation happens here, at the construction boundary; the controller's
/// loop only ever sees well-formed commands.
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: SyncSender<PlaybackCommand>,
}

impl CommandSender {
    pub fn send(&self, command: PlaybackCommand) -> PlaybackResult<()> {
        match self.tx.try_send(command) {
            Ok(()) => Ok(()),
            // Queue full: the consumer is alive but behind; dropping a
            // repeated key press is harmless.
            Err(TrySendError::Full(_)) => Ok(()),
            Err(TrySendError::Disconnected(_)) => Err(PlaybackError::QueueClosed),
        }
    }

    pub fn toggle_pause(&self) -> PlaybackResult<()> {
        self.send(PlaybackCommand::TogglePause)
    }

    pub fn increase_rate(&self, delta_tps: Real) -> PlaybackResult<()> {
        let delta = crate::command::RateDelta::new(delta_tps)?;
        self.send(PlaybackCommand::IncreaseRate(delta))
    }

    pub fn decrease_rate(&self, delta_tps: Real) -> PlaybackResult<()> {
        let delta = crate::command::RateDelta::new(delta_tps)?;
        self.send(PlaybackCommand::DecreaseRate(delta))
    }
}

/// Owns the playback state and the trajectory model; advances one frame per
/// tick. Commands are drained from the queue at the top of each tick, so
/// user input never interleaves with position evaluation.
pub struct PlaybackController {
    model: TrajectoryModel,
    options: PlaybackOptions,
    state: PlaybackState,
    commands: Receiver<PlaybackCommand>,
    current_position: Vec3,
    current_time_s: Real,
}

impl PlaybackController {
    /// Build a controller plus the command handle feeding it.
    pub fn new(
        model: TrajectoryModel,
        options: PlaybackOptions,
    ) -> PlaybackResult<(Self, CommandSender)> {
        options.validate()?;
        let (tx, rx) = sync_channel(COMMAND_QUEUE_DEPTH);
        let current_position = model.position(0.0) * options.display_scale;
        let controller = Self {
            model,
            options,
            state: PlaybackState::new(options.initial_rate_tps, options.start_paused),
            commands: rx,
            current_position,
            current_time_s: 0.0,
        };
        Ok((controller, CommandSender { tx }))
    }

    /// Apply a command synchronously, bypassing the queue. Used by tests and
    /// by frontends that run the loop on their own thread.
    pub fn apply(&mut self, command: PlaybackCommand) {
        self.state.apply(command);
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            tracing::debug!(?command, "applying playback command");
            self.state.apply(command);
        }
    }

    /// Process one tick. Returns the frame to emit, or `None` once playback
    /// has finished (terminal; later ticks keep returning `None`).
    pub fn tick(&mut self) -> Option<Frame> {
        self.drain_commands();
        match self.state.phase() {
            PlaybackPhase::Finished => None,
            PlaybackPhase::Paused => {
                // Keep the readout live without advancing physics: same
                // step, same time, same position.
                Some(self.frame(true))
            }
            PlaybackPhase::Running => {
                let step = self.state.step();
                if step >= self.options.step_count {
                    self.state.finish();
                    return None;
                }
                let t = step as Real * self.options.step_size_s;
                self.current_time_s = t;
                self.current_position = self.model.position(t) * self.options.display_scale;
                let frame = self.frame(false);
                self.state.advance_step();
                Some(frame)
            }
        }
    }

    fn frame(&self, paused: bool) -> Frame {
        Frame {
            step: self.state.step(),
            time_s: self.current_time_s,
            position: self.current_position,
            rate_tps: self.state.rate_tps(),
            paused,
        }
    }

    /// Simulated time corresponding to the current step index.
    pub fn time_s(&self) -> Real {
        self.state.step() as Real * self.options.step_size_s
    }

    pub fn rate_tps(&self) -> Real {
        self.state.rate_tps()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase() == PlaybackPhase::Finished
    }

    pub fn options(&self) -> &PlaybackOptions {
        &self.options
    }

    pub fn model(&self) -> &TrajectoryModel {
        &self.model
    }
}
