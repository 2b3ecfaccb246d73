//! Configuration types for describing simulation scenarios.
//!
//! This module defines a thin, `serde`-deserializable representation of an
//! orbital scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper, loadable from YAML
//!
//! Built-in presets produce the same types in code, so YAML files and the
//! preset catalog share one validation and construction path.
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! name: "Sun & Earth"
//!
//! parameters:
//!   dt: 3600.0              # simulated seconds per frame
//!   zoom: 1.3e-9            # render hint
//!
//! bodies:
//!   - name: "Sun"
//!     mass: 1.989e30
//!     radius: 6.955e8
//!     position: [0.0, 0.0]
//!     velocity: [0.0, 0.0]
//!     fixed: true
//!   - name: "Earth"
//!     mass: 5.9736e24
//!     radius: 6.371e6
//!     position: [1.496e11, 0.0]
//!     velocity: [0.0, 29780.0]
//!     mass_settable: true
//! ```
//!
//! Optional parameter fields (`g`, `force_scale`, `min_separation`,
//! `collisions`) default to the SI gravitational constant, 1.0, 1.0 m, and
//! true respectively.

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};

/// Why a scenario was rejected at construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scenario '{0}' has no bodies")]
    NoBodies(String),
    #[error("body '{0}' has non-positive mass {1}")]
    NonPositiveMass(String, f64),
    #[error("body '{0}' has non-positive radius {1}")]
    NonPositiveRadius(String, f64),
    #[error("duplicate body name '{0}'")]
    DuplicateBodyName(String),
    #[error("non-positive time step {0}")]
    NonPositiveTimeStep(f64),
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // simulated seconds per frame
    #[serde(default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_scale")]
    pub force_scale: f64, // multiplier on g for cartoon scenarios
    #[serde(default = "default_scale")]
    pub zoom: f64, // render hint
    #[serde(default = "default_min_separation")]
    pub min_separation: f64, // degenerate-distance clamp, m
    #[serde(default = "default_collisions")]
    pub collisions: bool,
}

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_scale() -> f64 {
    1.0
}

fn default_min_separation() -> f64 {
    1.0
}

fn default_collisions() -> bool {
    true
}

impl ParametersConfig {
    pub(crate) fn to_parameters(&self) -> Parameters {
        Parameters {
            dt: self.dt,
            g: self.g,
            force_scale: self.force_scale,
            zoom: self.zoom,
            min_separation: self.min_separation,
            collisions: self.collisions,
        }
    }
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub radius: f64, // m
    pub position: [f64; 2], // m
    pub velocity: [f64; 2], // m/s
    #[serde(default)]
    pub fixed: bool, // anchored to the reference frame
    #[serde(default)]
    pub rotation_period: Option<f64>, // s, render hint
    #[serde(default)]
    pub mass_settable: bool, // whether the UI exposes a mass slider
    #[serde(default)]
    pub mass_range: Option<[f64; 2]>, // slider bounds for settable masses, kg
}

/// Top-level scenario configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Reject scenarios that cannot participate in gravity and collision
    /// calculations. Called once at `Mode` construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies(self.name.clone()));
        }
        if self.parameters.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.parameters.dt));
        }
        for (i, body) in self.bodies.iter().enumerate() {
            if body.mass <= 0.0 {
                return Err(ConfigError::NonPositiveMass(body.name.clone(), body.mass));
            }
            if body.radius <= 0.0 {
                return Err(ConfigError::NonPositiveRadius(body.name.clone(), body.radius));
            }
            if self.bodies[..i].iter().any(|b| b.name == body.name) {
                return Err(ConfigError::DuplicateBodyName(body.name.clone()));
            }
        }
        Ok(())
    }
}
