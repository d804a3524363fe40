//! Explicit Euler time stepping for the sphere system
//!
//! Runs after the force/contact pass of the same frame. Not symplectic:
//! energy drifts, and a huge `dt` (e.g. after a stall) gives a huge step
//! unless `Parameters::max_dt` is set.

use super::states::System;

/// Advance every body by `dt` seconds:
/// v += a * dt, then x += v * dt (using the updated v)
pub fn euler_integrator(sys: &mut System, dt: f64) {
    for b in sys.bodies.iter_mut() {
        b.v += b.a * dt;
        b.x += b.v * dt;
    }
    sys.t += dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{Body, NVec3, Rgb};

    #[test]
    fn position_uses_updated_velocity() {
        let mut b = Body::new(NVec3::zeros(), NVec3::new(1.0, 0.0, 0.0), 1.0, 1.0, false, Rgb::GRAY).unwrap();
        b.a = NVec3::new(2.0, 0.0, -1.0);
        let mut sys = System { bodies: vec![b], t: 0.0 };

        euler_integrator(&mut sys, 0.5);

        let b = &sys.bodies[0];
        assert_eq!(b.v, NVec3::new(2.0, 0.0, -0.5));
        assert_eq!(b.x, NVec3::new(1.0, 0.0, -0.25));
        assert_eq!(sys.t, 0.5);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut b = Body::new(NVec3::new(3.0, 4.0, 5.0), NVec3::new(1.0, 1.0, 1.0), 1.0, 1.0, false, Rgb::GRAY).unwrap();
        b.a = NVec3::new(9.0, 9.0, 9.0);
        let mut sys = System { bodies: vec![b.clone()], t: 0.0 };
        euler_integrator(&mut sys, 0.0);
        assert_eq!(sys.bodies[0].x, b.x);
        assert_eq!(sys.bodies[0].v, b.v);
    }
}
