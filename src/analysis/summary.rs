//! Console summaries of a simulation run
//!
//! `TrajectorySummary` describes one integrator's trajectory, and
//! `Comparison` lines the two up over their common prefix

use std::fmt;

use crate::simulation::engine::SimulationOutput;
use crate::simulation::params::Body;
use crate::simulation::states::{State, Trajectory};

/// Specific orbital energy |v|^2 / 2 - GM / |x|
pub fn specific_energy(body: &Body, s: &State) -> f64 {
    0.5 * s.v.norm_squared() - body.mu() / s.x.norm()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySummary {
    pub samples: usize,
    pub impacted: bool,
    pub end_time: f64,        // grid time of the last retained sample
    pub final_altitude: f64,  // |x| - R at the last sample
    pub final_speed: f64,     // |v| at the last sample
    pub energy_drift: f64,    // relative change of specific energy, first to last
}

impl TrajectorySummary {
    /// Summarize `traj` against the grid `times` it was stepped on.
    /// `None` for an empty trajectory
    pub fn of(traj: &Trajectory, times: &[f64], body: &Body) -> Option<Self> {
        let first = traj.state(0)?;
        let last = traj.last()?;

        let e0 = specific_energy(body, &first);
        let e1 = specific_energy(body, &last);
        let energy_drift = if e0 != 0.0 { ((e1 - e0) / e0).abs() } else { (e1 - e0).abs() };

        // The bootstrap sample can sit past the end of a one-sample grid
        let end_time = times.get(traj.len() - 1).copied().unwrap_or(f64::NAN);

        Some(Self {
            samples: traj.len(),
            impacted: traj.impacted(),
            end_time,
            final_altitude: last.x.norm() - body.R,
            final_speed: last.v.norm(),
            energy_drift,
        })
    }
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.impacted { "impact" } else { "horizon" };
        write!(
            f,
            "{:7} samples, ends by {:7} at t = {:10.3} s, altitude = {:+.6e} m, speed = {:.6e} m/s, energy drift = {:.3e}",
            self.samples, outcome, self.end_time, self.final_altitude, self.final_speed, self.energy_drift
        )
    }
}

/// Sample-by-sample comparison of the two schemes
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub explicit_len: usize,
    pub two_step_len: usize,
    pub common_len: usize,
    pub max_separation: f64, // max |x_explicit - x_two_step| over the common prefix
}

impl Comparison {
    pub fn of(output: &SimulationOutput) -> Self {
        let (a, b) = output.common_prefix();

        let max_separation = a
            .positions
            .iter()
            .zip(b.positions.iter())
            .map(|(xa, xb)| (xa - xb).norm())
            .fold(0.0, f64::max);

        Self {
            explicit_len: output.explicit.len(),
            two_step_len: output.two_step.len(),
            common_len: a.len(),
            max_separation,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lengths explicit = {}, two-step = {}, compared over {} samples, max separation = {:.6e} m",
            self.explicit_len, self.two_step_len, self.common_len, self.max_separation
        )
    }
}

/// Full multi-line report for one run
pub fn report(name: &str, body: &Body, output: &SimulationOutput) -> String {
    let mut out = format!("== {name} ({} grid samples)\n", output.times.len());
    for (label, traj) in [("explicit", &output.explicit), ("two-step", &output.two_step)] {
        match TrajectorySummary::of(traj, &output.times, body) {
            Some(s) => out.push_str(&format!("  {label:9} {s}\n")),
            None => out.push_str(&format!("  {label:9} (empty)\n")),
        }
    }
    out.push_str(&format!("  {}\n", Comparison::of(output)));
    out
}
