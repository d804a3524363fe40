//! Depth-sorted draw list with a layered lighting approximation
//!
//! Each frame the camera transforms every body, bodies are ordered
//! farthest-first, and each one becomes draw calls for a 2D surface:
//! - emitters are a single solid circle in their own color
//! - non-emitters with no emitter in view are a single solid circle
//! - otherwise a non-emitter is a stack of translucent layers, each nudged
//!   toward the average screen direction of the emitters
//!
//! There is no depth buffer and no shading math; the layer offsets fake a
//! lit side.

use crate::simulation::states::{BodyId, NVec2, Rgb, System, Viewport};
use super::camera::{depth_sort, Camera, ViewBody};

/// Default number of gradient layers per lit body
pub const DEFAULT_LAYERS: usize = 10;

/// One primitive for the drawing surface, in screen pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    /// Opaque filled circle
    FillCircle { center: NVec2, radius: f64, color: Rgb },
    /// Translucent filled circle blended over what is already drawn
    BlendLayer { center: NVec2, radius: f64, color: Rgb, alpha: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingParams {
    pub layers: usize,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self { layers: DEFAULT_LAYERS }
    }
}

/// Everything drawn in one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub order: Vec<BodyId>, // draw order, farthest first
    pub calls: Vec<DrawCall>,
}

/// Normalized mean direction from `at` to each light; zero if there are no
/// lights or the mean vector has no length.
pub fn light_direction(at: NVec2, lights: &[NVec2]) -> NVec2 {
    if lights.is_empty() {
        return NVec2::zeros();
    }
    let sum: NVec2 = lights.iter().map(|l| l - at).sum();
    let mean = sum / lights.len() as f64;
    let len = mean.norm();
    if len > 0.0 {
        mean / len
    } else {
        NVec2::zeros()
    }
}

/// Gradient layers for a lit body, emitted for i = n, n-1, ..., 1.
///
/// Layer i has radius r(1 - i/n), alpha 255(1 - i/n) and sits `dir * r*i/n`
/// away from the body centre.
pub fn lit_layers(center: NVec2, radius: f64, color: Rgb, dir: NVec2, n: usize) -> Vec<DrawCall> {
    let step = radius / n as f64;
    (1..=n)
        .rev()
        .map(|i| {
            let f = i as f64 / n as f64;
            DrawCall::BlendLayer {
                center: center + dir * (step * i as f64),
                radius: radius * (1.0 - f),
                color,
                alpha: (255.0 * (1.0 - f)) as u8,
            }
        })
        .collect()
}

/// Transform, depth-sort and shade every body of `sys`
pub fn render_frame(sys: &System, camera: &Camera, viewport: &Viewport, lighting: &LightingParams) -> Frame {
    let mut view = camera.transform_all(sys, viewport);
    depth_sort(&mut view);

    // Screen positions of emitters, taken after the camera transform
    let emitters: Vec<(BodyId, NVec2)> = view
        .iter()
        .filter(|vb| sys.bodies[vb.id.0].emits_light)
        .map(|vb| (vb.id, Camera::project(&vb.transformed, viewport)))
        .collect();

    let mut frame = Frame {
        order: view.iter().map(|vb| vb.id).collect(),
        calls: Vec::with_capacity(view.len()),
    };

    for vb in &view {
        shade_body(sys, vb, &emitters, viewport, lighting, &mut frame.calls);
    }
    frame
}

fn shade_body(
    sys: &System,
    vb: &ViewBody,
    emitters: &[(BodyId, NVec2)],
    viewport: &Viewport,
    lighting: &LightingParams,
    out: &mut Vec<DrawCall>,
) {
    let body = &sys.bodies[vb.id.0];
    let center = Camera::project(&vb.transformed, viewport);

    let lights: Vec<NVec2> = emitters
        .iter()
        .filter(|(id, _)| *id != vb.id)
        .map(|(_, p)| *p)
        .collect();

    if body.emits_light || lights.is_empty() || lighting.layers == 0 {
        out.push(DrawCall::FillCircle { center, radius: body.radius, color: body.color });
        return;
    }

    let dir = light_direction(center, &lights);
    out.extend(lit_layers(center, body.radius, body.color, dir, lighting.layers));
}
