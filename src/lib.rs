pub mod simulation;
pub mod configuration;
pub mod analysis;
pub mod descent;
pub mod benchmark;
pub mod error;

pub use simulation::states::{NVec3, State, Trajectory};
pub use simulation::params::{Body, Parameters, TEST_MASS};
pub use simulation::forces::{CentralGravity, ForceModel};
pub use simulation::integrator::{explicit_step, reconstruct_velocities, two_step};
pub use simulation::engine::{time_grid, SimulationOutput, Simulator};
pub use simulation::scenario::{Scenario, PRESET_NAMES};

pub use configuration::config::{BodyConfig, InitialConfig, ParametersConfig, ScenarioConfig};

pub use analysis::summary::{report, specific_energy, Comparison, TrajectorySummary};

pub use descent::record::{target_descent_rate, DescentLog, DescentRecord, DescentSummary, DEFAULT_KH};

pub use benchmark::benchmark::bench_simulate;

pub use error::{Result, SimError};
