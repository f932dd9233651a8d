//! Playback state machine.

use crate::command::PlaybackCommand;
use pt_core::Real;

/// Where the playback loop is in its lifecycle. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Running,
    Paused,
    Finished,
}

/// Mutable playback bookkeeping: step index, phase and rate.
///
/// Single writer: the controller mutates this on ticks and when draining
/// the command queue; nothing else holds a reference to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    step: usize,
    rate_tps: Real,
    phase: PlaybackPhase,
}

impl PlaybackState {
    pub fn new(initial_rate_tps: Real, start_paused: bool) -> Self {
        Self {
            step: 0,
            rate_tps: initial_rate_tps,
            phase: if start_paused {
                PlaybackPhase::Paused
            } else {
                PlaybackPhase::Running
            },
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn rate_tps(&self) -> Real {
        self.rate_tps
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub(crate) fn advance_step(&mut self) {
        self.step += 1;
    }

    pub(crate) fn finish(&mut self) {
        self.phase = PlaybackPhase::Finished;
    }

    /// Apply one command. Pause toggling is ignored once finished; rate
    /// changes apply in any non-terminal state and take effect on the next
    /// tick. A decrease floors at one increment so the rate can never reach
    /// zero or go negative.
    pub fn apply(&mut self, command: PlaybackCommand) {
        if self.phase == PlaybackPhase::Finished {
            return;
        }
        match command {
            PlaybackCommand::TogglePause => {
                self.phase = match self.phase {
                    PlaybackPhase::Running => PlaybackPhase::Paused,
                    PlaybackPhase::Paused => PlaybackPhase::Running,
                    PlaybackPhase::Finished => PlaybackPhase::Finished,
                };
            }
            PlaybackCommand::IncreaseRate(delta) => {
                self.rate_tps += delta.get();
            }
            PlaybackCommand::DecreaseRate(delta) => {
                self.rate_tps = (self.rate_tps - delta.get()).max(delta.get());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::RateDelta;

    fn delta(v: f64) -> RateDelta {
        RateDelta::new(v).unwrap()
    }

    #[test]
    fn toggle_flips_between_running_and_paused() {
        let mut state = PlaybackState::new(1500.0, true);
        assert_eq!(state.phase(), PlaybackPhase::Paused);
        state.apply(PlaybackCommand::TogglePause);
        assert_eq!(state.phase(), PlaybackPhase::Running);
        state.apply(PlaybackCommand::TogglePause);
        assert_eq!(state.phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn finished_ignores_all_commands() {
        let mut state = PlaybackState::new(1500.0, false);
        state.finish();
        state.apply(PlaybackCommand::TogglePause);
        assert_eq!(state.phase(), PlaybackPhase::Finished);
        state.apply(PlaybackCommand::IncreaseRate(delta(100.0)));
        assert_eq!(state.rate_tps(), 1500.0);
    }

    #[test]
    fn decrease_floors_at_one_increment() {
        let mut state = PlaybackState::new(400.0, false);
        for _ in 0..10 {
            state.apply(PlaybackCommand::DecreaseRate(delta(150.0)));
        }
        assert_eq!(state.rate_tps(), 150.0);
    }

    #[test]
    fn rate_changes_apply_while_paused() {
        // The original allowed editing the rate while paused; keep that.
        let mut state = PlaybackState::new(1500.0, true);
        state.apply(PlaybackCommand::IncreaseRate(delta(150.0)));
        assert_eq!(state.rate_tps(), 1650.0);
        assert_eq!(state.phase(), PlaybackPhase::Paused);
    }

    proptest::proptest! {
        #[test]
        fn n_increases_add_exactly_n_deltas(n in 1usize..64, d in 1.0f64..500.0) {
            let mut state = PlaybackState::new(1500.0, false);
            let delta = RateDelta::new(d).unwrap();
            let mut expected = 1500.0;
            for _ in 0..n {
                state.apply(PlaybackCommand::IncreaseRate(delta));
                expected += d;
            }
            proptest::prop_assert_eq!(state.rate_tps(), expected);
        }

        #[test]
        fn rate_never_drops_below_increment(
            n in 1usize..64,
            d in 1.0f64..500.0,
            initial in 1.0f64..5000.0,
        ) {
            let mut state = PlaybackState::new(initial, false);
            let delta = RateDelta::new(d).unwrap();
            for _ in 0..n {
                state.apply(PlaybackCommand::DecreaseRate(delta));
            }
            proptest::prop_assert!(state.rate_tps() >= d);
        }
    }
}
