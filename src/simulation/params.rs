//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` (scaled for pixel-sized worlds)
//! - restitution coefficient `e` used by the impulse resolver
//! - optional upper bound on the frame delta

/// Gravitational constant at simulation scale
pub const DEFAULT_G: f64 = 66.743;

/// Bounciness of sphere-sphere contacts
pub const DEFAULT_RESTITUTION: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub restitution: f64, // e in the impulse formula
    pub max_dt: Option<f64>, // None = take wall-clock delta as is
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            restitution: DEFAULT_RESTITUTION,
            max_dt: None,
        }
    }
}

impl Parameters {
    /// Frame delta actually fed to the integrator
    pub fn step_dt(&self, raw_dt: f64) -> f64 {
        match self.max_dt {
            Some(max) => raw_dt.min(max),
            None => raw_dt,
        }
    }
}
