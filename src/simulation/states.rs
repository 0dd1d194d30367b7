//! Core state types for the fall simulation.
//!
//! - `State`      one (position, velocity) sample
//! - `Trajectory` time-ordered samples for a single integrator
//!
//! Both integrators record into their own `Trajectory`; the two may end
//! up with different lengths because each one stops at its own impact.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub positions: Vec<NVec3>,  // position per retained step
    pub velocities: Vec<NVec3>, // velocity per retained step
    pub impact: Option<usize>,  // index of the sample that hit the surface
}

impl Trajectory {
    /// Empty trajectory with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            impact: None,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn impacted(&self) -> bool {
        self.impact.is_some()
    }

    /// Sample `i`, if both series reach that far
    pub fn state(&self, i: usize) -> Option<State> {
        let x = *self.positions.get(i)?;
        let v = *self.velocities.get(i)?;
        Some(State { x, v })
    }

    pub fn last(&self) -> Option<State> {
        self.state(self.len().checked_sub(1)?)
    }

    /// Cut the trajectory down to its first `len` samples.
    /// An impact index past the new end is dropped.
    pub fn truncate(&mut self, len: usize) {
        self.positions.truncate(len);
        self.velocities.truncate(len);
        if self.impact.is_some_and(|i| i >= len) {
            self.impact = None;
        }
    }
}
