//! Fixed-timestep accumulator.
//!
//! Wall-clock frame time goes in through [`FixedStepClock::advance`], which
//! reports how many whole simulation steps to run. The remainder stays in
//! `lag` and becomes the draw interpolation fraction [`FixedStepClock::alpha`].
//! Frames longer than `max_frame` are clamped so a stall cannot queue an
//! unbounded number of catch-up steps.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepClock {
    step: Duration,
    lag: Duration,
    max_frame: Duration,
}

impl FixedStepClock {
    /// Clock draining `step`-long steps; a zero step is bumped to one millisecond.
    pub fn new(step: Duration, max_frame: Duration) -> Self {
        Self {
            step: step.max(Duration::from_millis(1)),
            lag: Duration::ZERO,
            max_frame,
        }
    }

    /// Add `elapsed` to the lag and drain it. Returns the number of steps to run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.lag += elapsed.min(self.max_frame);

        let mut steps = 0;
        while self.lag >= self.step {
            self.lag -= self.step;
            steps += 1;
        }
        steps
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Step length in seconds, the `dt` handed to the simulation.
    pub fn step_seconds(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Time accumulated but not yet simulated.
    pub fn lag(&self) -> Duration {
        self.lag
    }

    /// `lag / step`, in `[0, 1)` after [`advance`](Self::advance).
    pub fn alpha(&self) -> f32 {
        self.lag.as_secs_f32() / self.step.as_secs_f32()
    }

    pub fn reset(&mut self) {
        self.lag = Duration::ZERO;
    }
}
