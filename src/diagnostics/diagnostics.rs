//! Energy and momentum readouts over a body set
//!
//! Used by the headless driver's end-of-run report and by the stability
//! tests. Exploded bodies are inert and excluded, matching the integrator.

use crate::simulation::states::{Body, NVec2};

/// Sum of (1/2) m v^2 over all non-exploded bodies.
pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| b.current_state())
        .filter(|s| !s.exploded)
        .map(|s| 0.5 * s.mass * s.velocity.norm_squared())
        .sum()
}

/// Pairwise -G m_i m_j / r over all non-exploded bodies.
/// Near-zero separations contribute nothing rather than a singularity.
pub fn total_potential_energy(bodies: &[Body], g: f64) -> f64 {
    let states: Vec<_> = bodies
        .iter()
        .map(|b| b.current_state())
        .filter(|s| !s.exploded)
        .collect();
    let mut potential = 0.0;
    for i in 0..states.len() {
        for j in (i + 1)..states.len() {
            let r = (states[i].position - states[j].position).norm();
            if r > 1e-9 {
                potential -= g * states[i].mass * states[j].mass / r;
            }
        }
    }
    potential
}

/// Total mechanical energy, kinetic plus gravitational potential.
pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    total_kinetic_energy(bodies) + total_potential_energy(bodies, g)
}

/// Sum of m v over all non-exploded bodies.
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies
        .iter()
        .map(|b| b.current_state())
        .filter(|s| !s.exploded)
        .map(|s| s.mass * s.velocity)
        .sum()
}
