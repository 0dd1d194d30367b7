use std::time::Instant;

use crate::simulation::engine::Simulator;
use crate::simulation::forces::CentralGravity;
use crate::simulation::params::Body;
use crate::simulation::scenario::Scenario;

/// Time `simulate` on the vertical drop for a ladder of step sizes and
/// report where each scheme lands.
/// Paste output directly into excel to graph
pub fn bench_simulate() {
    let base = Scenario::vertical_drop(Body::MARS);
    let sim = Simulator::new(CentralGravity::new(base.body));

    // Largest to smallest, so the impact time visibly converges
    let steps = [0.1, 0.05, 0.01, 0.005, 0.001, 0.0005, 0.0001];
    let repeats = 3;

    println!("dt,ms,explicit_samples,explicit_t_impact,two_step_samples,two_step_t_impact");

    for dt in steps {
        // Warm-up
        let _ = sim.simulate(base.x0, base.v0, base.parameters.t_end, dt);

        let t0 = Instant::now();
        let mut out = sim.simulate(base.x0, base.v0, base.parameters.t_end, dt);
        for _ in 1..repeats {
            out = sim.simulate(base.x0, base.v0, base.parameters.t_end, dt);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

        // Grid time of the last retained sample, NaN if the horizon ran out first
        let t_impact = |len: usize, impacted: bool| {
            if impacted {
                out.time_at(len - 1).unwrap_or(f64::NAN)
            } else {
                f64::NAN
            }
        };
        let te = t_impact(out.explicit.len(), out.explicit.impacted());
        let tv = t_impact(out.two_step.len(), out.two_step.impacted());

        println!(
            "{},{:.6},{},{:.4},{},{:.4}",
            dt,
            ms,
            out.explicit.len(),
            te,
            out.two_step.len(),
            tv
        );
    }
}
