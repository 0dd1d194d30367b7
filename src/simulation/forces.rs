//! Force model for a point mass around a fixed central body
//!
//! Defines the [`ForceModel`] trait the simulator steps against, and
//! [`CentralGravity`], the inverse-square pull toward the origin

use crate::simulation::params::Body;
use crate::simulation::states::NVec3;

/// Trait for force sources acting on a single test mass
/// Implementations also own the termination test, since only they know
/// where the surface is
pub trait ForceModel {
    /// Force on mass `m` at position `r`
    fn force(&self, m: f64, r: &NVec3) -> NVec3;

    /// True once `pos` is on or below the surface
    fn hit_ground(&self, pos: &NVec3) -> bool;

    /// Acceleration of mass `m` at `r`
    fn acceleration(&self, m: f64, r: &NVec3) -> NVec3 {
        self.force(m, r) / m
    }
}

/// Newtonian gravity of a single fixed body centred at the origin.
/// No softening: `r` must be non-zero, which holds in practice because the
/// surface test stops stepping before `|r|` can reach zero
#[derive(Debug, Clone, Copy)]
pub struct CentralGravity {
    pub body: Body,
}

impl CentralGravity {
    pub fn new(body: Body) -> Self {
        Self { body }
    }
}

impl ForceModel for CentralGravity {
    #[allow(non_snake_case)]
    fn force(&self, m: f64, r: &NVec3) -> NVec3 {
        let Body { G, M, .. } = self.body;

        // |r|
        let dist = r.norm();

        // Signed magnitude -G M m / |r|^2 (negative: points back at origin)
        let coef = -G * M * m / (dist * dist);

        // Scale the unit vector r / |r|
        coef * r / dist
    }

    fn hit_ground(&self, pos: &NVec3) -> bool {
        pos.norm() <= self.body.R
    }
}
