//! Simulation clock and time-control state machine
//!
//! Two states, PAUSED and RUNNING, expressed as `running: bool`. While
//! running, an external animation driver feeds wall-clock deltas into
//! `tick`, which converts them into a whole number of fixed frames at the
//! nominal frame rate; the owning `Mode` performs one physics step per frame.
//! While paused, `step_while_paused` grants exactly one frame.
//!
//! The clock never advances its own simulation time; `Mode` commits time via
//! `advance` after a step and winds it back on rewind, so the clock and the
//! body states cannot drift apart.

/// Nominal frame period of the animation driver, s.
pub const FRAME_PERIOD: f64 = 1.0 / 60.0;

/// Playback speed multiplier applied to the nominal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedScale {
    SlowMotion,
    Normal,
    FastForward,
}

impl SpeedScale {
    pub fn factor(self) -> f64 {
        match self {
            SpeedScale::SlowMotion => 0.25,
            SpeedScale::Normal => 1.0,
            SpeedScale::FastForward => 1.75,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Clock {
    simulation_time: f64, // s
    running: bool,
    dt: f64, // nominal simulated seconds per frame
    speed: SpeedScale,
    accumulator: f64, // unconsumed wall time, s
}

impl Clock {
    pub fn new(dt: f64) -> Self {
        Self {
            simulation_time: 0.0,
            running: false,
            dt,
            speed: SpeedScale::Normal,
            accumulator: 0.0,
        }
    }

    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> SpeedScale {
        self.speed
    }

    pub fn set_speed(&mut self, speed: SpeedScale) {
        self.speed = speed;
    }

    /// Simulated seconds one frame advances at the current speed.
    pub fn effective_dt(&self) -> f64 {
        self.dt * self.speed.factor()
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Feed a wall-clock delta and get back the number of whole frames to
    /// step. Deltas are ignored while paused.
    pub fn tick(&mut self, real_dt: f64) -> usize {
        if !self.running || real_dt <= 0.0 {
            return 0;
        }
        self.accumulator += real_dt;
        let frames = (self.accumulator / FRAME_PERIOD).floor();
        self.accumulator -= frames * FRAME_PERIOD;
        frames as usize
    }

    /// Grant a single frame while paused. Returns false (and grants nothing)
    /// if the clock is running.
    pub fn step_while_paused(&mut self) -> bool {
        !self.running
    }

    /// Commit simulated time after a completed step.
    pub(crate) fn advance(&mut self, dt: f64) {
        self.simulation_time += dt;
    }

    /// Set the displayed simulation time without touching the run state or
    /// any body. Used by the UI's day-counter "clear".
    pub fn set_simulation_time(&mut self, t: f64) {
        self.simulation_time = t;
    }
}
