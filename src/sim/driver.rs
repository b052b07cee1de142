//! Fixed-rate scene driver
//!
//! One accumulator-driven scheduler runs input sampling, simulation and
//! per-object updates in lockstep at the target tick rate. The sampling
//! callback is supplied by the platform layer, which keeps this module
//! headless-testable.

use super::state::GameState;
use super::tick::{tick, TickInput};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest stretch of wall time consumed per advance; anything beyond
/// (a paused tab, a debugger stop) is dropped rather than replayed.
const MAX_FRAME_DT: f32 = 0.25;

/// Fixed-rate tick scheduler.
///
/// Ticks only run between `start` and `stop`. Stopping cancels future
/// ticks but does not rewind state; ticks themselves are atomic and never
/// cancelled mid-way.
#[derive(Debug, Default)]
pub struct SceneDriver {
    accumulator: f32,
    running: bool,
}

impl SceneDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin scheduling ticks. Starting again without an intervening stop
    /// is a no-op.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulator = 0.0;
            log::info!("scene driver started");
        }
    }

    /// Cancel future ticks.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("scene driver stopped");
        }
    }

    /// Consume `dt` seconds of wall time, running as many fixed ticks as
    /// fit (capped per call). Each tick samples the key table exactly once
    /// via `sample`, so a key transition between ticks is absorbed by the
    /// next tick's sample. Returns the number of ticks run.
    pub fn advance(
        &mut self,
        state: &mut GameState,
        dt: f32,
        mut sample: impl FnMut() -> TickInput,
    ) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = sample();
            tick(state, &input);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn scene() -> GameState {
        GameState::new(Vec2::new(800.0, 600.0), Vec2::new(100.0, 100.0))
    }

    #[test]
    fn test_not_running_runs_no_ticks() {
        let mut driver = SceneDriver::new();
        let mut state = scene();
        let ran = driver.advance(&mut state, 1.0, TickInput::default);
        assert_eq!(ran, 0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_fixed_cadence() {
        let mut driver = SceneDriver::new();
        let mut state = scene();
        driver.start();
        let ran = driver.advance(&mut state, SIM_DT * 3.0, TickInput::default);
        assert_eq!(ran, 3);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_accumulator_carries_remainder() {
        let mut driver = SceneDriver::new();
        let mut state = scene();
        driver.start();
        assert_eq!(driver.advance(&mut state, SIM_DT * 0.75, TickInput::default), 0);
        assert_eq!(driver.advance(&mut state, SIM_DT * 0.75, TickInput::default), 1);
    }

    #[test]
    fn test_substep_cap() {
        let mut driver = SceneDriver::new();
        let mut state = scene();
        driver.start();
        // A quarter second backlog would be 15 ticks at 60 Hz
        let ran = driver.advance(&mut state, 0.25, TickInput::default);
        assert_eq!(ran, MAX_SUBSTEPS);
    }

    #[test]
    fn test_start_is_idempotent_only_when_stopped() {
        let mut driver = SceneDriver::new();
        let mut state = scene();
        driver.start();
        driver.advance(&mut state, SIM_DT * 0.9, TickInput::default);
        // A second start while running must not reset the backlog
        driver.start();
        assert_eq!(driver.advance(&mut state, SIM_DT * 0.2, TickInput::default), 1);
    }

    #[test]
    fn test_stop_cancels_future_ticks() {
        let mut driver = SceneDriver::new();
        let mut state = scene();
        driver.start();
        driver.advance(&mut state, SIM_DT, TickInput::default);
        driver.stop();
        assert!(!driver.is_running());
        assert_eq!(driver.advance(&mut state, SIM_DT * 5.0, TickInput::default), 0);
        // State is not rewound
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_sample_called_once_per_tick() {
        let mut driver = SceneDriver::new();
        let mut state = scene();
        driver.start();
        let mut samples = 0;
        driver.advance(&mut state, SIM_DT * 4.0, || {
            samples += 1;
            TickInput::default()
        });
        assert_eq!(samples, 4);
    }
}
