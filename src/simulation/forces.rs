//! Acceleration contributors for the orbital integrator
//!
//! Defines the acceleration trait and the direct pairwise Newtonian gravity
//! term. Terms operate on a snapshot of all body states and accumulate into a
//! shared per-body buffer, so one tick always sees a globally consistent set
//! of positions.

use crate::simulation::states::{BodyState, NVec2};

/// Collection of acceleration terms (gravity today; a scenario could add
/// drag or thrust later). Each term implements [`Acceleration`] and their
/// contributions are summed into a single acceleration vector per body.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `states`.
    /// `out[i]` is set to the sum of contributions from all terms.
    pub fn accumulate_accels(&self, states: &[BodyState], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(states, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on a body-state snapshot.
/// Implementations add their contribution into `out[i]` for each body.
pub trait Acceleration {
    fn acceleration(&self, states: &[BodyState], out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity.
///
/// Separations below `min_separation` are clamped to it before the inverse
/// cube, so a degenerate overlap never divides by zero; such a pair is about
/// to be flagged as a collision anyway. Exploded bodies neither feel nor
/// exert gravity.
pub struct NewtonianGravity {
    pub g: f64, // effective gravitational constant (G * force scale)
    pub min_separation: f64, // clamp for near-zero separations, m
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, states: &[BodyState], out: &mut [NVec2]) {
        let n = states.len();
        if n == 0 {
            return;
        }

        let min_r2 = self.min_separation * self.min_separation;

        // Loop over each unordered pair (i, j) with i < j and apply the
        // equal-and-opposite contributions together, so Newton's third law
        // holds exactly and total momentum is conserved to roundoff.
        for i in 0..n {
            let bi = &states[i];
            if bi.exploded {
                continue;
            }

            for j in (i + 1)..n {
                let bj = &states[j];
                if bj.exploded {
                    continue;
                }

                // Displacement from i to j: i is pulled along +r, j along -r.
                let r = bj.position - bi.position;
                let r2 = r.norm_squared();

                // Degenerate-overlap guard: clamp the separation used in the
                // denominator. The direction is kept from `r`; if the bodies
                // are exactly coincident there is no direction to pull along
                // and the pair is skipped (the collision pass handles it).
                if r2 == 0.0 {
                    continue;
                }
                let d2 = r2.max(min_r2);

                // a = G * m * r / |r|^3, written as r * G * m / |r|^3
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3;

                out[i] += coef * bj.mass * r;
                out[j] -= coef * bi.mass * r;
            }
        }
    }
}
