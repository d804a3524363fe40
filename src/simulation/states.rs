//! Core state types for the sphere simulation.
//!
//! - `Body`   one sphere: physical state plus its fixed display color
//! - `System` the collection of every placed body and the elapsed time `t`
//!
//! Bodies are addressed by their index in `System::bodies` (`BodyId`).
//! Nothing else holds a reference to a body between frames.

use nalgebra::{Vector2, Vector3};

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// 8-bit RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GRAY: Rgb = Rgb(100, 100, 100);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

/// Pixel size of the drawing surface. Screen coordinates have their
/// origin top-left with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen centre, the origin of camera space
    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Index of a body inside [`System::bodies`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position (screen pixels in x/y, synthetic depth in z)
    pub v: NVec3, // velocity
    pub a: NVec3, // acceleration, rebuilt every frame
    pub m: f64, // mass, always > 0
    pub radius: f64, // radius, always > 0
    pub emits_light: bool,
    pub color: Rgb, // fixed at creation
}

impl Body {
    /// Build a body, rejecting anything that would break the force or impulse math.
    ///
    /// `color` is picked by the caller from `emits_light` and never recomputed.
    pub fn new(x: NVec3, v: NVec3, m: f64, radius: f64, emits_light: bool, color: Rgb) -> Result<Self, SimError> {
        if !x.iter().chain(v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::NonFinite("position/velocity"));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass(m));
        }

        Ok(Self {
            x,
            v,
            a: NVec3::zeros(),
            m,
            radius,
            emits_light,
            color,
        })
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // every placed body, never removed
    pub t: f64, // simulated time
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body and hand back its id
    pub fn insert(&mut self, body: Body) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}

/// Mutable access to two distinct bodies at once.
///
/// Panics if `i == j` or either index is out of range.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert_ne!(i, j, "pair_mut needs two distinct bodies");
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(m: f64, radius: f64) -> Result<Body, SimError> {
        Body::new(NVec3::zeros(), NVec3::zeros(), m, radius, false, Rgb::GRAY)
    }

    #[test]
    fn rejects_zero_and_negative_mass() {
        assert!(matches!(body(0.0, 1.0), Err(SimError::InvalidMass(_))));
        assert!(matches!(body(-2.0, 1.0), Err(SimError::InvalidMass(_))));
    }

    #[test]
    fn rejects_zero_radius_and_nan() {
        assert!(matches!(body(1.0, 0.0), Err(SimError::InvalidRadius(_))));
        assert!(matches!(body(1.0, f64::NAN), Err(SimError::InvalidRadius(_))));
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut bodies = vec![body(1.0, 1.0).unwrap(), body(2.0, 1.0).unwrap()];
        let (b1, b0) = pair_mut(&mut bodies, 1, 0);
        assert_eq!(b1.m, 2.0);
        assert_eq!(b0.m, 1.0);
    }
}
