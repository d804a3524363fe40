//! Rotating orthographic camera.
//!
//! World positions are shifted so the screen centre is the origin, rotated
//! by `yaw` about the vertical axis and then by `pitch` about the horizontal
//! axis. The result only feeds depth ordering and the orthographic
//! projection `screen = centre + (x, y)`; z never scales anything.

use nalgebra::{Rotation3, Vector3};

use crate::simulation::states::{BodyId, NVec2, NVec3, System, Viewport};

/// Default rotation per frame while an arrow key is held, in radians
pub const DEFAULT_ROTATION_SPEED: f64 = 0.0005;

/// Directional input held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub yaw: f64, // about the vertical axis
    pub pitch: f64, // about the horizontal axis
    pub rotation_speed: f64, // radians per frame while held
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }
}

impl Camera {
    pub fn new(rotation_speed: f64) -> Self {
        Self { rotation_speed, ..Self::default() }
    }

    /// Add raw angle deltas
    pub fn rotate(&mut self, d_yaw: f64, d_pitch: f64) {
        self.yaw += d_yaw;
        self.pitch += d_pitch;
    }

    /// `(yaw, pitch)` deltas for one frame of held arrow keys.
    /// Opposite keys cancel.
    pub fn input_delta(&self, input: RotationInput) -> (f64, f64) {
        let step = self.rotation_speed;
        let mut d_yaw = 0.0;
        let mut d_pitch = 0.0;
        if input.left {
            d_yaw += step;
        }
        if input.right {
            d_yaw -= step;
        }
        if input.up {
            d_pitch += step;
        }
        if input.down {
            d_pitch -= step;
        }
        (d_yaw, d_pitch)
    }

    /// Yaw first, then pitch. Yaw sends +x towards +z.
    pub fn rotation(&self) -> Rotation3<f64> {
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), -self.yaw);
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch);
        pitch * yaw
    }

    /// Camera-space position of a world point
    pub fn transform(&self, x: &NVec3, viewport: &Viewport) -> NVec3 {
        let c = viewport.center();
        let rel = NVec3::new(x.x - c.x, x.y - c.y, x.z);
        self.rotation() * rel
    }

    /// Orthographic projection of a camera-space point to screen pixels
    pub fn project(transformed: &NVec3, viewport: &Viewport) -> NVec2 {
        viewport.center() + transformed.xy()
    }

    /// Fresh per-frame render state, one entry per body in id order
    pub fn transform_all(&self, sys: &System, viewport: &Viewport) -> Vec<ViewBody> {
        let rot = self.rotation();
        let c = viewport.center();
        sys.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| ViewBody {
                id: BodyId(i),
                transformed: rot * NVec3::new(b.x.x - c.x, b.x.y - c.y, b.x.z),
            })
            .collect()
    }
}

/// Camera-space position of one body for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBody {
    pub id: BodyId,
    pub transformed: NVec3,
}

/// Back-to-front order: largest z first.
/// Ties break by `BodyId`: the sort is stable and `transform_all` rebuilds the view in id order.
pub fn depth_sort(view: &mut [ViewBody]) {
    view.sort_by(|a, b| b.transformed.z.total_cmp(&a.transformed.z));
}
