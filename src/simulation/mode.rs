//! Scenario orchestration: one configured body set against one clock
//!
//! A `Mode` is the runtime bundle built from a [`ScenarioConfig`]: the
//! bodies, the clock, the numeric parameters, and the active force set. It
//! owns its bodies exclusively and is the only place that steps, rewinds, or
//! resets them, so every mutation sees and preserves a consistent whole-set
//! snapshot.
//!
//! Rewinding works off per-body checkpoint stacks plus a parallel stack of
//! simulation times. `step` pushes onto all of them before committing new
//! states; `rewind` pops all of them together or not at all.

use thiserror::Error;

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::clock::Clock;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyState, NVec2};

/// Why a runtime command against a `Mode` was rejected.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no body named '{0}' in this scenario")]
    UnknownBody(String),
    #[error("mass of '{0}' is not settable")]
    MassNotSettable(String),
    #[error("non-positive mass {0}")]
    NonPositiveMass(f64),
}

pub struct Mode {
    name: String,
    bodies: Vec<Body>,
    clock: Clock,
    parameters: Parameters,
    forces: AccelSet,
    gravity_enabled: bool,
    time_history: Vec<f64>, // simulation time at each checkpoint
}

impl Mode {
    /// Validate a scenario description and build its runtime bundle.
    ///
    /// The initial acceleration readout is computed here so force displays
    /// are correct before the first step, and it is captured in each body's
    /// initial state so `reset` restores it too.
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let parameters = cfg.parameters.to_parameters();
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.effective_g(),
            min_separation: parameters.min_separation,
        });

        // Initial states with the acceleration readout already filled in
        let mut states: Vec<BodyState> = cfg
            .bodies
            .iter()
            .map(|bc| {
                BodyState::new(
                    NVec2::new(bc.position[0], bc.position[1]),
                    NVec2::new(bc.velocity[0], bc.velocity[1]),
                    bc.mass,
                )
            })
            .collect();
        let mut accels = vec![NVec2::zeros(); states.len()];
        forces.accumulate_accels(&states, &mut accels);
        for (state, a) in states.iter_mut().zip(accels) {
            state.acceleration = a;
        }

        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .zip(states)
            .map(|(bc, state)| {
                Body::new(
                    bc.name.clone(),
                    bc.radius,
                    bc.fixed,
                    bc.rotation_period,
                    bc.mass_settable,
                    bc.mass_range,
                    state,
                )
            })
            .collect();

        let clock = Clock::new(parameters.dt);
        log::info!("mode '{}' ready with {} bodies", cfg.name, bodies.len());

        Ok(Self {
            name: cfg.name,
            bodies,
            clock,
            parameters,
            forces,
            gravity_enabled: true,
            time_history: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the bodies for rendering and readouts.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    /// Advance the whole scenario by one frame.
    ///
    /// Checkpoints every body and the current simulation time first, then
    /// runs one joint integrator pass over the full body set and commits all
    /// new states together, so the step both reads and writes a single
    /// consistent snapshot.
    pub fn step(&mut self) {
        for body in &mut self.bodies {
            body.push_history();
        }
        self.time_history.push(self.clock.simulation_time());

        let dt_scale = self.clock.speed().factor();
        let next = verlet_step(
            &self.bodies,
            &self.forces,
            &self.parameters,
            dt_scale,
            self.gravity_enabled,
        );
        for (body, state) in self.bodies.iter_mut().zip(next) {
            body.set_state(state);
        }

        self.clock.advance(self.clock.effective_dt());
    }

    /// Feed a wall-clock delta from the animation driver, stepping once per
    /// elapsed frame while the clock is running.
    pub fn tick(&mut self, real_dt: f64) {
        let frames = self.clock.tick(real_dt);
        for _ in 0..frames {
            self.step();
        }
    }

    /// Single-step the scenario while paused; ignored while running.
    pub fn step_while_paused(&mut self) {
        if self.clock.step_while_paused() {
            self.step();
        }
    }

    /// True iff at least one body has recorded history to rewind into.
    pub fn is_rewind_available(&self) -> bool {
        self.bodies.iter().any(|b| b.history_len() > 0)
    }

    /// Undo the most recent step: restore every body's previous state and
    /// wind the clock back to the checkpointed time.
    ///
    /// A no-op when no history exists. If history depths ever disagree
    /// across bodies the whole rewind is refused, since restoring only some
    /// bodies would leave the gravitationally coupled set inconsistent.
    pub fn rewind(&mut self) {
        if !self.is_rewind_available() {
            return;
        }

        let depth = self.time_history.len();
        let consistent = depth > 0 && self.bodies.iter().all(|b| b.history_len() == depth);
        debug_assert!(consistent, "rewind history depth diverged across bodies");
        if !consistent {
            log::warn!("mode '{}': inconsistent rewind history, refusing", self.name);
            return;
        }

        for body in &mut self.bodies {
            body.pop_history();
        }
        if let Some(t) = self.time_history.pop() {
            self.clock.set_simulation_time(t);
        }
    }

    /// Back to the configured initial conditions: bodies restored, history
    /// discarded, clock at zero and paused.
    pub fn reset(&mut self) {
        for body in &mut self.bodies {
            body.reset();
        }
        self.time_history.clear();
        self.clock.pause();
        self.clock.set_simulation_time(0.0);
        log::debug!("mode '{}' reset", self.name);
    }

    /// Change a settable body's mass in place. Takes effect at the next
    /// step; deliberately records no rewind checkpoint.
    pub fn set_body_mass(&mut self, name: &str, mass: f64) -> Result<(), CommandError> {
        if mass <= 0.0 {
            return Err(CommandError::NonPositiveMass(mass));
        }
        let body = self
            .bodies
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| CommandError::UnknownBody(name.to_string()))?;
        if !body.mass_settable {
            return Err(CommandError::MassNotSettable(name.to_string()));
        }
        let updated = body.current_state().with_mass(mass);
        body.set_state(updated);
        Ok(())
    }
}
