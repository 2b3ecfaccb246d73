//! Fixed-step velocity-Verlet integrator for the orbital simulation
//!
//! One symplectic step over the whole body set, driven by an [`AccelSet`].
//! The step is a pure function: it reads the bodies' current states and
//! returns a fresh `BodyState` per body, leaving the inputs untouched so the
//! caller can checkpoint the prior snapshot for rewinding before committing.

use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyState, NVec2};

/// Advance all bodies by one step of `params.dt * dt_scale` using
/// velocity-Verlet, with two force evaluations per step:
///
/// 1. a_n from the input positions (all zero when gravity is disabled)
/// 2. x_{n+1} = x_n + v_n dt + (1/2) a_n dt^2
/// 3. a_{n+1} from the updated positions
/// 4. v_{n+1} = v_n + (1/2) (a_n + a_{n+1}) dt
///
/// Fixed bodies keep their position and report zero velocity, but their
/// computed acceleration is still stored for force readouts. Exploded bodies
/// are returned unchanged. All new states are derived from the same input
/// snapshot; the caller commits them together.
pub fn verlet_step(
    bodies: &[Body],
    forces: &AccelSet,
    params: &Parameters,
    dt_scale: f64,
    gravity_enabled: bool,
) -> Vec<BodyState> {
    let n = bodies.len();
    if n == 0 {
        return Vec::new();
    }

    let dt = params.dt * dt_scale;
    let half_dt = 0.5 * dt;

    let current: Vec<BodyState> = bodies.iter().map(|b| *b.current_state()).collect();

    // a_n at the current positions
    let mut a_old = vec![NVec2::zeros(); n];
    if gravity_enabled {
        forces.accumulate_accels(&current, &mut a_old);
    }

    // Drift: full-step positions from the consistent input snapshot
    let mut next: Vec<BodyState> = current
        .iter()
        .zip(bodies.iter())
        .zip(a_old.iter())
        .map(|((state, body), a)| {
            if state.exploded || body.fixed {
                return *state;
            }
            BodyState {
                position: state.position + state.velocity * dt + *a * (half_dt * dt),
                ..*state
            }
        })
        .collect();

    // a_{n+1} at the updated positions
    let mut a_new = vec![NVec2::zeros(); n];
    if gravity_enabled {
        forces.accumulate_accels(&next, &mut a_new);
    }

    // Kick: finish the velocity update and store the new acceleration
    for (i, body) in bodies.iter().enumerate() {
        let state = &mut next[i];
        if state.exploded {
            continue;
        }
        if body.fixed {
            // Anchored to the reference frame; acceleration kept for readouts
            state.velocity = NVec2::zeros();
            state.acceleration = a_new[i];
            continue;
        }
        state.velocity += (a_old[i] + a_new[i]) * half_dt;
        state.acceleration = a_new[i];
    }

    if params.collisions {
        detect_collisions(bodies, &mut next);
    }

    next
}

/// Mark every overlapping pair of non-exploded bodies as exploded.
///
/// Overlap means center distance below the sum of radii. An exploded body is
/// frozen where the collision happened and drops out of gravity from the next
/// step onward.
fn detect_collisions(bodies: &[Body], states: &mut [BodyState]) {
    let n = states.len();
    // Pairs are judged against the flags as of entry, so a body colliding
    // with two others in the same step marks all three.
    let already_exploded: Vec<bool> = states.iter().map(|s| s.exploded).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            if already_exploded[i] || already_exploded[j] {
                continue;
            }
            let threshold = bodies[i].radius + bodies[j].radius;
            let d2 = states[i].distance_squared(&states[j].position);
            if d2 < threshold * threshold {
                log::debug!(
                    "collision: {} and {} at separation {:.3e} m",
                    bodies[i].name,
                    bodies[j].name,
                    d2.sqrt()
                );
                for k in [i, j] {
                    states[k].exploded = true;
                    states[k].acceleration = NVec2::zeros();
                }
            }
        }
    }
}
