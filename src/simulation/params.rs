//! Numerical and physical parameters for a scenario
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt`,
//! - gravitational constant `g` and the scenario's force scale,
//! - the degenerate-separation guard `min_separation`,
//! - the collision toggle and the render zoom hint

/// Newtonian gravitational constant, SI units (m^3 kg^-1 s^-2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67428e-11;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // nominal step size, s
    pub g: f64, // gravitational constant
    pub force_scale: f64, // multiplier on g, 1.0 for to-scale scenarios
    pub zoom: f64, // render hint, unused by the physics
    pub min_separation: f64, // separations below this are clamped, m
    pub collisions: bool, // whether the pairwise collision pass runs
}

impl Parameters {
    /// Effective gravitational constant after scenario scaling.
    pub fn effective_g(&self) -> f64 {
        self.g * self.force_scale
    }
}
