//! Configuration types for loading fall scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`BodyConfig`]       – central body constants (optional, defaults to Mars)
//! - [`ParametersConfig`] – horizon and step size
//! - [`InitialConfig`]    – launch position and velocity
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! name: "vertical-drop"
//!
//! body:                     # optional
//!   G: 6.673e-11            # gravitational constant
//!   M: 6.42e23              # central mass
//!   R: 3386000.0            # surface radius
//!
//! parameters:
//!   t_end: 100.0            # horizon (exclusive)
//!   h0: 0.001               # fixed step size
//!
//! initial:
//!   x: [ 3386100.0, 0.0, 0.0 ]
//!   v: [ 0.0, 0.0, 0.0 ]
//! ```
//!
//! Values are checked when the config is turned into a runtime
//! `Scenario`, not while deserializing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Central body constants
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub G: f64, // gravitational constant
    pub M: f64, // central mass
    pub R: f64, // surface radius, must be positive
}

/// Numerical parameters
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // horizon
    pub h0: f64,    // step size
}

/// Launch state of the test mass
#[derive(Deserialize, Debug, Clone)]
pub struct InitialConfig {
    pub x: Vec<f64>, // initial position, 3 components
    pub v: Vec<f64>, // initial velocity, 3 components
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub body: Option<BodyConfig>,
    pub parameters: ParametersConfig,
    pub initial: InitialConfig,
}

fn default_name() -> String {
    "custom".to_string()
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}
