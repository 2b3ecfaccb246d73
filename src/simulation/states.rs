//! Core state types for the orbital simulation.
//!
//! Defines the per-tick dynamic snapshot and the long-lived body entity:
//! - `BodyState` — immutable value describing one body's dynamics at an instant
//! - `Body`      — mutable entity holding the current state, the initial state,
//!                 and the rewind history of past states
//!
//! A scenario's `Mode` owns its bodies exclusively; all mutation goes through
//! `Mode::step` / `Mode::rewind` / `Mode::reset`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Snapshot of one body's dynamics at an instant.
///
/// Produced once per tick by the integrator from the previous tick's states;
/// never mutated afterwards. Mass changes replace the whole state rather than
/// editing it in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: NVec2, // m
    pub velocity: NVec2, // m/s
    pub acceleration: NVec2, // m/s^2
    pub mass: f64, // kg
    pub exploded: bool, // terminal collision flag
}

impl BodyState {
    pub fn new(position: NVec2, velocity: NVec2, mass: f64) -> Self {
        Self {
            position,
            velocity,
            acceleration: NVec2::zeros(),
            mass,
            exploded: false,
        }
    }

    /// Squared distance from this body's center to `point`.
    pub fn distance_squared(&self, point: &NVec2) -> f64 {
        (point - self.position).norm_squared()
    }

    /// Copy of this state with a different mass.
    pub fn with_mass(&self, mass: f64) -> Self {
        Self { mass, ..*self }
    }
}

/// One simulated celestial object.
///
/// Wraps the current `BodyState` plus the static per-body attributes the
/// integrator consults (radius for collisions, `fixed` for frame anchoring)
/// and the history buffer that backs rewinding. The history holds exactly the
/// states the body passed through since the last reset, oldest first.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub radius: f64, // m, collision size
    pub fixed: bool, // anchored bodies never move
    pub rotation_period: Option<f64>, // s, render hint only
    pub mass_settable: bool, // whether the UI may change this body's mass
    pub mass_range: Option<[f64; 2]>, // slider metadata, unused by the physics
    state: BodyState,
    initial_state: BodyState,
    history: Vec<BodyState>,
}

impl Body {
    pub fn new(
        name: String,
        radius: f64,
        fixed: bool,
        rotation_period: Option<f64>,
        mass_settable: bool,
        mass_range: Option<[f64; 2]>,
        state: BodyState,
    ) -> Self {
        Self {
            name,
            radius,
            fixed,
            rotation_period,
            mass_settable,
            mass_range,
            state,
            initial_state: state,
            history: Vec::new(),
        }
    }

    pub fn current_state(&self) -> &BodyState {
        &self.state
    }

    /// Replace the current state without recording a checkpoint.
    /// Used for commits after a step and for mass changes.
    pub(crate) fn set_state(&mut self, state: BodyState) {
        self.state = state;
    }

    /// Record the current state as a rewind checkpoint.
    pub(crate) fn push_history(&mut self) {
        self.history.push(self.state);
    }

    /// Restore the most recent checkpoint, if any.
    pub(crate) fn pop_history(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.state = prev;
                true
            }
            None => false,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Back to the initial configured state, history discarded.
    pub(crate) fn reset(&mut self) {
        self.state = self.initial_state;
        self.history.clear();
    }
}
