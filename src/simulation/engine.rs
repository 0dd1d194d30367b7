//! Trajectory simulator
//!
//! Runs the explicit and two-step integrators over a shared time grid,
//! stopping each one at its first surface impact, and rebuilds the
//! two-step velocities from its positions afterwards

use log::{debug, warn};

use super::forces::ForceModel;
use super::integrator::{explicit_step, reconstruct_velocities, two_step};
use super::states::{NVec3, Trajectory};

/// Sample times `i * h0` covering `[0, t_end)`.
/// Empty unless both `t_end` and `h0` are finite and strictly positive
pub fn time_grid(t_end: f64, h0: f64) -> Vec<f64> {
    if !(t_end.is_finite() && h0.is_finite() && t_end > 0.0 && h0 > 0.0) {
        return Vec::new();
    }
    let n = (t_end / h0).ceil() as usize;
    (0..n).map(|i| i as f64 * h0).collect()
}

/// Everything one `simulate` call produces
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub times: Vec<f64>,       // nominal grid, before truncation
    pub explicit: Trajectory,  // explicit-step scheme
    pub two_step: Trajectory,  // two-step scheme, velocities reconstructed
}

impl SimulationOutput {
    /// Flatten into (times, explicit x, explicit v, two-step x, two-step v)
    pub fn into_series(self) -> (Vec<f64>, Vec<NVec3>, Vec<NVec3>, Vec<NVec3>, Vec<NVec3>) {
        (
            self.times,
            self.explicit.positions,
            self.explicit.velocities,
            self.two_step.positions,
            self.two_step.velocities,
        )
    }

    /// Grid time of sample `i`
    pub fn time_at(&self, i: usize) -> Option<f64> {
        self.times.get(i).copied()
    }

    /// Both trajectories cut to their common length, for sample-by-sample
    /// comparison. The originals are left untouched
    pub fn common_prefix(&self) -> (Trajectory, Trajectory) {
        let n = self.explicit.len().min(self.two_step.len());
        let mut a = self.explicit.clone();
        let mut b = self.two_step.clone();
        a.truncate(n);
        b.truncate(n);
        (a, b)
    }
}

/// Steps a single test mass through a [`ForceModel`]. The model (and the
/// body it describes) is fixed at construction and only read afterwards
#[derive(Debug, Clone)]
pub struct Simulator<F: ForceModel> {
    model: F,
}

impl<F: ForceModel> Simulator<F> {
    pub fn new(model: F) -> Self {
        Self { model }
    }

    /// Integrate from (`x0`, `v0`) with step `h0` up to `t_end` with both
    /// schemes. Inputs are not validated; see [`time_grid`] for how
    /// non-positive values degrade
    pub fn simulate(&self, x0: NVec3, v0: NVec3, t_end: f64, h0: f64) -> SimulationOutput {
        let times = time_grid(t_end, h0);
        debug!("simulate: {} grid samples, dt = {}", times.len(), h0);

        if self.model.hit_ground(&x0) {
            warn!("initial position |x0| = {} is on or inside the surface", x0.norm());
        }

        let explicit = self.run_explicit(x0, v0, times.len(), h0);
        let two_step = self.run_two_step(x0, v0, times.len(), h0);

        SimulationOutput {
            times,
            explicit,
            two_step,
        }
    }

    /// Explicit scheme over `n` grid samples, stopping after the first
    /// sample that satisfies the impact test
    fn run_explicit(&self, x0: NVec3, v0: NVec3, n: usize, dt: f64) -> Trajectory {
        let mut traj = Trajectory::with_capacity(n.max(1));
        traj.positions.push(x0);
        traj.velocities.push(v0);

        let mut x = x0;
        let mut v = v0;

        for _ in 1..n {
            (x, v) = explicit_step(&self.model, &x, &v, dt);
            traj.positions.push(x);
            traj.velocities.push(v);

            if self.model.hit_ground(&x) {
                traj.impact = Some(traj.len() - 1);
                break;
            }
        }

        debug!("explicit: {} samples, impact = {:?}", traj.len(), traj.impact);
        traj
    }

    /// Two-step scheme over `n` grid samples. The bootstrap sample
    /// x1 = x0 + dt v0 is always emitted and is not impact-tested
    fn run_two_step(&self, x0: NVec3, v0: NVec3, n: usize, dt: f64) -> Trajectory {
        let mut traj = Trajectory::with_capacity(n.max(2));
        traj.positions.push(x0);

        let mut x_prev = x0;
        let mut x = x0 + dt * v0;
        traj.positions.push(x);

        for _ in 2..n {
            let x_next = two_step(&self.model, &x, &x_prev, dt);
            x_prev = x;
            x = x_next;
            traj.positions.push(x);

            if self.model.hit_ground(&x) {
                traj.impact = Some(traj.len() - 1);
                break;
            }
        }

        // Sample 0 keeps the launch velocity, the rest are reconstructed
        traj.velocities.push(v0);
        traj.velocities.extend(reconstruct_velocities(&traj.positions, dt));

        debug!("two-step: {} samples, impact = {:?}", traj.len(), traj.impact);
        traj
    }
}
