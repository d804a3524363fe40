//! Impulse-based sphere-sphere collision response
//!
//! Only velocities are touched. Overlap is allowed to persist across frames;
//! a pair that is still interpenetrating but already moving apart is skipped
//! by the separating-velocity check, so it does not stick.

use super::states::Body;

/// Resolves contacts with a 1D impulse along the contact normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseResolver {
    pub restitution: f64, // e
}

impl ImpulseResolver {
    pub fn new(restitution: f64) -> Self {
        Self { restitution }
    }

    /// `true` when the centres are closer than the sum of the radii
    pub fn overlapping(a: &Body, b: &Body) -> bool {
        (b.x - a.x).norm() < a.radius + b.radius
    }

    /// Apply the contact impulse to `b1` and `b2`. Returns whether velocities changed.
    ///
    /// j = -(1 + e) * vn / (1/m1 + 1/m2), then each body gets j*n/m scaled by e
    /// once more. The second factor of e is kept as observed behaviour.
    pub fn resolve(&self, b1: &mut Body, b2: &mut Body) -> bool {
        // Normal from b1 towards b2
        let r = b2.x - b1.x;
        let dist = r.norm();
        if dist == 0.0 { // coincident centres, no normal
            return false;
        }
        let n = r / dist;

        // Relative velocity along the normal
        let vn = (b2.v - b1.v).dot(&n);

        // Already separating
        if vn > 0.0 {
            return false;
        }

        let e = self.restitution;
        let j = -(1.0 + e) * vn / (1.0 / b1.m + 1.0 / b2.m);
        let impulse = j * n;

        b1.v -= impulse / b1.m * e;
        b2.v += impulse / b2.m * e;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{NVec3, Rgb};

    fn ball(x: f64, vx: f64, m: f64) -> Body {
        Body::new(NVec3::new(x, 0.0, 0.0), NVec3::new(vx, 0.0, 0.0), m, 1.0, false, Rgb::GRAY).unwrap()
    }

    #[test]
    fn coincident_centres_are_skipped() {
        let mut a = ball(0.0, 1.0, 1.0);
        let mut b = ball(0.0, -1.0, 1.0);
        assert!(!ImpulseResolver::new(0.9).resolve(&mut a, &mut b));
        assert_eq!(a.v.x, 1.0);
        assert_eq!(b.v.x, -1.0);
    }

    #[test]
    fn heavy_body_barely_moves() {
        let mut light = ball(0.0, 10.0, 1.0);
        let mut heavy = ball(1.5, 0.0, 1000.0);
        assert!(ImpulseResolver::new(0.9).resolve(&mut light, &mut heavy));
        assert!(light.v.x < 0.0);
        assert!(heavy.v.x > 0.0 && heavy.v.x < 0.1);
    }

    #[test]
    fn overlap_is_strict() {
        let a = ball(0.0, 0.0, 1.0);
        let touching = ball(2.0, 0.0, 1.0);
        let inside = ball(1.999, 0.0, 1.0);
        assert!(!ImpulseResolver::overlapping(&a, &touching));
        assert!(ImpulseResolver::overlapping(&a, &inside));
    }
}
