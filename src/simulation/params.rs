//! Physical and numerical parameters for the simulation
//!
//! `Body` holds the central body's constants (`G`, `M`, `R`) and is never
//! mutated once built; `Parameters` holds the horizon and step size

/// Mass of the falling object. Fixed at one, so force and acceleration
/// coincide
pub const TEST_MASS: f64 = 1.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub G: f64, // gravitational constant
    pub M: f64, // central mass
    pub R: f64, // surface radius
}

impl Body {
    pub const MARS: Body = Body {
        G: 6.673e-11,
        M: 6.42e23,
        R: 3386000.0,
    };

    /// Standard gravitational parameter G*M
    pub fn mu(&self) -> f64 {
        self.G * self.M
    }

    /// Gravitational acceleration magnitude at the surface
    pub fn surface_gravity(&self) -> f64 {
        self.mu() / (self.R * self.R)
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::MARS
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub t_end: f64, // time horizon (exclusive)
    pub h0: f64,    // step size
}
