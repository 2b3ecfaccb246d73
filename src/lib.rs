pub mod simulation;
pub mod configuration;
pub mod diagnostics;

pub use simulation::states::{Body, BodyState, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::verlet_step;
pub use simulation::clock::{Clock, SpeedScale, FRAME_PERIOD};
pub use simulation::mode::{CommandError, Mode};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};
pub use simulation::presets::Preset;

pub use configuration::config::{BodyConfig, ConfigError, ParametersConfig, ScenarioConfig};

pub use diagnostics::diagnostics::{
    total_energy, total_kinetic_energy, total_momentum, total_potential_energy,
};
