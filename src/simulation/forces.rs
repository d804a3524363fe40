//! Pairwise gravity and contact dispatch for the sphere simulation
//!
//! Every ordered pair (i, j), i != j, is visited once per frame:
//! - overlapping pairs go to the [`ImpulseResolver`] and add no gravity
//! - separated pairs add Newtonian gravity from j onto i
//!
//! Accelerations are zeroed for all bodies before the first pair is processed.

use bevy::log::debug;

use super::collision::ImpulseResolver;
use super::params::Parameters;
use super::states::{pair_mut, Body, NVec3, System};

/// Unsoftened Newtonian gravity, `a = G * m_source / d^2` towards the source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Acceleration felt by `target` due to `source`.
    /// Coincident centres contribute exactly zero.
    pub fn acceleration(&self, target: &Body, source: &Body) -> NVec3 {
        // r points from target to source, so the pull is along +r
        let r = source.x - target.x;
        let d = r.norm();
        if d > 0.0 {
            // |a| = G * m_source / d^2, direction r / d
            (self.g * source.m / (d * d)) * (r / d)
        } else {
            NVec3::zeros()
        }
    }
}

/// O(n^2) force pass with collision hand-off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    pub gravity: NewtonianGravity,
    pub resolver: ImpulseResolver,
}

impl ForceModel {
    pub fn new(params: &Parameters) -> Self {
        Self {
            gravity: NewtonianGravity { g: params.g },
            resolver: ImpulseResolver::new(params.restitution),
        }
    }

    /// Rebuild every body's acceleration and resolve contacts in place.
    /// Returns the number of impulses actually applied.
    pub fn accumulate(&self, sys: &mut System) -> usize {
        let n = sys.bodies.len();

        // Zero buffer
        for b in sys.bodies.iter_mut() {
            b.a = NVec3::zeros();
        }

        let mut impulses = 0;
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }

                let (bi, bj) = pair_mut(&mut sys.bodies, i, j);
                if ImpulseResolver::overlapping(bi, bj) {
                    if self.resolver.resolve(bi, bj) {
                        impulses += 1;
                    }
                } else {
                    let a = self.gravity.acceleration(bi, bj);
                    bi.a += a;
                }
            }
        }

        if impulses > 0 {
            debug!("resolved {impulses} contact impulse(s)");
        }
        impulses
    }
}
