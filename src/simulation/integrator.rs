//! Fixed-step time integrators for a single test mass
//!
//! Provides the explicit (forward) step, the two-step position scheme
//! and the velocity reconstruction used by the latter, all driven by a
//! [`ForceModel`]

use super::forces::ForceModel;
use super::params::TEST_MASS;
use super::states::NVec3;

/// Advance one explicit step.
/// Position moves with the pre-step velocity and velocity moves with the
/// acceleration at the pre-step position:
/// x_n+1 = x_n + dt v_n
/// v_n+1 = v_n + dt a(x_n)
pub fn explicit_step<F: ForceModel + ?Sized>(model: &F, x: &NVec3, v: &NVec3, dt: f64) -> (NVec3, NVec3) {
    // a_n from x_n
    let a = model.acceleration(TEST_MASS, x);

    let x_next = x + dt * v;
    let v_next = v + dt * a;

    (x_next, v_next)
}

/// Advance the two-step position scheme:
/// x_n+1 = 2 x_n - x_n-1 + dt^2 a(x_n)
pub fn two_step<F: ForceModel + ?Sized>(model: &F, x: &NVec3, x_prev: &NVec3, dt: f64) -> NVec3 {
    let a = model.acceleration(TEST_MASS, x);
    2.0 * x - x_prev + (dt * dt) * a
}

/// Recover velocities from a position series sampled every `dt`.
///
/// Sample 0 gets no entry: the result starts at sample 1 and has
/// `positions.len() - 1` entries. Interior samples use the central
/// difference (x[i+1] - x[i-1]) / 2dt, the final sample uses the backward
/// difference (x[last] - x[last-1]) / dt. Fewer than two positions give an
/// empty result.
pub fn reconstruct_velocities(positions: &[NVec3], dt: f64) -> Vec<NVec3> {
    let n = positions.len();
    if n < 2 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n - 1);

    // Interior: both neighbours exist
    for i in 1..n - 1 {
        out.push((positions[i + 1] - positions[i - 1]) / (2.0 * dt));
    }

    // Last sample: no forward neighbour yet
    out.push((positions[n - 1] - positions[n - 2]) / dt);

    out
}
