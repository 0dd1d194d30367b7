//! Build fully-initialized fall scenarios
//!
//! A `Scenario` bundles:
//! - the central body (`Body`)
//! - numerical parameters (`Parameters`)
//! - the launch state (`x0`, `v0`)
//!
//! Scenarios come either from one of the four named presets or from a
//! YAML-facing `ScenarioConfig`, and are consumed by `Scenario::run`

use log::warn;

use crate::configuration::config::ScenarioConfig;
use crate::error::{Result, SimError};
use crate::simulation::engine::{SimulationOutput, Simulator};
use crate::simulation::forces::CentralGravity;
use crate::simulation::params::{Body, Parameters};
use crate::simulation::states::NVec3;

/// Names accepted by [`Scenario::preset`], in canonical run order
pub const PRESET_NAMES: [&str; 4] = ["vertical_drop", "circular_orbit", "elliptical_orbit", "oblique_launch"];

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub body: Body,
    pub parameters: Parameters,
    pub x0: NVec3,
    pub v0: NVec3,
}

impl Scenario {
    /// Release from rest 100 m above the surface
    pub fn vertical_drop(body: Body) -> Self {
        Self {
            name: "vertical_drop".to_string(),
            body,
            parameters: Parameters { t_end: 100.0, h0: 0.001 },
            x0: NVec3::new(100.0 + body.R, 0.0, 0.0),
            v0: NVec3::zeros(),
        }
    }

    /// Lateral launch at circular-orbit speed, 1000 km up
    pub fn circular_orbit(body: Body) -> Self {
        let x0 = NVec3::new(1e6 + body.R, 0.0, 0.0);
        let v = (body.mu() / x0.norm()).sqrt();
        Self {
            name: "circular_orbit".to_string(),
            body,
            parameters: Parameters { t_end: 10000.0, h0: 0.5 },
            x0,
            v0: NVec3::new(0.0, v, 0.0),
        }
    }

    /// Lateral launch between circular and escape speed, 1000 km up
    pub fn elliptical_orbit(body: Body) -> Self {
        let x0 = NVec3::new(1e6 + body.R, 0.0, 0.0);
        let v = (1.5 * body.mu() / x0.norm()).sqrt();
        Self {
            name: "elliptical_orbit".to_string(),
            body,
            parameters: Parameters { t_end: 1000000.0, h0: 20.0 },
            x0,
            v0: NVec3::new(0.0, v, 0.0),
        }
    }

    /// Tangential launch from the surface at twice escape speed
    pub fn oblique_launch(body: Body) -> Self {
        let ratio = NVec3::new(1.0, 1.0, 0.0);
        let x0 = ratio * body.R / ratio.norm();

        let v = (2.0 * body.mu() / x0.norm()).sqrt() * 2.0;
        let dir = NVec3::new(-1.0, 1.0, 0.0);

        Self {
            name: "oblique_launch".to_string(),
            body,
            parameters: Parameters { t_end: 1000.0, h0: 0.1 },
            x0,
            v0: v * dir / dir.norm(),
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str, body: Body) -> Result<Self> {
        match name {
            "vertical_drop" => Ok(Self::vertical_drop(body)),
            "circular_orbit" => Ok(Self::circular_orbit(body)),
            "elliptical_orbit" => Ok(Self::elliptical_orbit(body)),
            "oblique_launch" => Ok(Self::oblique_launch(body)),
            other => Err(SimError::UnknownScenario(other.to_string())),
        }
    }

    /// All presets in canonical order
    pub fn presets(body: Body) -> Vec<Self> {
        vec![
            Self::vertical_drop(body),
            Self::circular_orbit(body),
            Self::elliptical_orbit(body),
            Self::oblique_launch(body),
        ]
    }

    /// Validate a `ScenarioConfig` and map it to a runtime `Scenario`
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self> {
        // Body: default to Mars when the file does not name one
        let body = match cfg.body {
            Some(b) => Body { G: b.G, M: b.M, R: b.R },
            None => Body::MARS,
        };
        if !(body.R.is_finite() && body.R > 0.0) {
            return Err(SimError::InvalidParameter(format!("R must be positive, got {}", body.R)));
        }
        if !(body.G.is_finite() && body.G >= 0.0) || !(body.M.is_finite() && body.M >= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "G and M must be non-negative, got G = {}, M = {}",
                body.G, body.M
            )));
        }

        // Parameters: both must give a non-empty grid
        let p_cfg = cfg.parameters;
        for (field, value) in [("t_end", p_cfg.t_end), ("h0", p_cfg.h0)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter(format!("{field} must be positive, got {value}")));
            }
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
        };

        // Launch state
        let x0 = vector3("initial.x", &cfg.initial.x)?;
        let v0 = vector3("initial.v", &cfg.initial.v)?;
        if x0.norm() == 0.0 {
            return Err(SimError::InvalidParameter("initial.x must not be the origin".to_string()));
        }
        if x0.norm() <= body.R {
            warn!("scenario `{}` starts on or inside the surface", cfg.name);
        }

        Ok(Self {
            name: cfg.name,
            body,
            parameters,
            x0,
            v0,
        })
    }

    /// Run both integrators on this scenario
    pub fn run(&self) -> SimulationOutput {
        let sim = Simulator::new(CentralGravity::new(self.body));
        sim.simulate(self.x0, self.v0, self.parameters.t_end, self.parameters.h0)
    }
}

fn vector3(field: &'static str, xs: &[f64]) -> Result<NVec3> {
    match xs {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::InvalidVector { field, len: xs.len() }),
    }
}
