//! Sphere-creation protocol
//!
//! A pointer press opens a capture. Five values are then typed one at a time,
//! each confirmed with Enter: radius, mass, velocity magnitude, velocity angle
//! (degrees) and emits-light (1 or 0). After the fifth value the capture yields
//! a [`PlacementRequest`], which [`PlacementRules::place`] turns into a [`Body`].
//!
//! Bad text or a non-positive radius/mass re-prompts the same step; the
//! pending placement itself survives.

use bevy::log::warn;

use crate::error::{SimError, SimResult};
use super::states::{Body, NVec2, NVec3, Rgb, Viewport};

/// One typed property, in capture order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Radius,
    Mass,
    Speed,
    Angle,
    EmitsLight,
}

impl Property {
    pub const ORDER: [Property; 5] = [
        Property::Radius,
        Property::Mass,
        Property::Speed,
        Property::Angle,
        Property::EmitsLight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Property::Radius => "Radius",
            Property::Mass => "Mass",
            Property::Speed => "Velocity magnitude",
            Property::Angle => "Velocity angle",
            Property::EmitsLight => "Emits light (1 or 0)",
        }
    }

    fn check(self, value: f64) -> SimResult<f64> {
        match self {
            Property::Radius if value <= 0.0 => Err(SimError::InvalidRadius(value)),
            Property::Mass if value <= 0.0 => Err(SimError::InvalidMass(value)),
            _ => Ok(value),
        }
    }
}

/// Everything the user picks for a new sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProperties {
    pub radius: f64,
    pub mass: f64,
    pub speed: f64,
    pub angle_deg: f64,
    pub emits_light: bool,
}

impl SphereProperties {
    /// Polar (speed, angle in degrees) to a planar velocity with zero z
    pub fn velocity(&self) -> NVec3 {
        let theta = self.angle_deg.to_radians();
        NVec3::new(self.speed * theta.cos(), self.speed * theta.sin(), 0.0)
    }
}

/// Completed capture: where the user clicked and what they typed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub at: NVec2, // screen pixels, top-left origin
    pub properties: SphereProperties,
}

#[derive(Debug, Clone)]
struct Pending {
    at: NVec2,
    step: usize,
    text: String,
    values: [f64; 5],
}

/// State machine driving the five-step property prompt
#[derive(Debug, Clone, Default)]
pub struct PropertyCapture {
    pending: Option<Pending>,
}

impl PropertyCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Start capturing for a click at `at`. Ignored (returns false) if a
    /// capture is already running.
    pub fn begin(&mut self, at: NVec2) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(Pending {
            at,
            step: 0,
            text: String::new(),
            values: [0.0; 5],
        });
        true
    }

    /// Property currently being typed
    pub fn current(&self) -> Option<Property> {
        self.pending.as_ref().map(|p| Property::ORDER[p.step])
    }

    /// Text typed so far for the current property
    pub fn text(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.text.as_str())
    }

    /// "Radius: 12" style prompt line
    pub fn prompt(&self) -> Option<String> {
        let p = self.pending.as_ref()?;
        Some(format!("{}: {}", Property::ORDER[p.step].label(), p.text))
    }

    pub fn push_char(&mut self, c: char) -> SimResult<()> {
        let p = self.pending.as_mut().ok_or(SimError::NoPendingPlacement)?;
        if !c.is_control() {
            p.text.push(c);
        }
        Ok(())
    }

    pub fn backspace(&mut self) -> SimResult<()> {
        let p = self.pending.as_mut().ok_or(SimError::NoPendingPlacement)?;
        p.text.pop();
        Ok(())
    }

    /// Confirm the current property.
    ///
    /// `Ok(Some(_))` once all five are in, `Ok(None)` while more are needed.
    /// On `Err` the step is kept and its text cleared for a retry.
    pub fn enter(&mut self) -> SimResult<Option<PlacementRequest>> {
        let p = self.pending.as_mut().ok_or(SimError::NoPendingPlacement)?;
        let property = Property::ORDER[p.step];
        let text = std::mem::take(&mut p.text);

        let value = match parse_number(&text).and_then(|v| property.check(v)) {
            Ok(v) => v,
            Err(err) => {
                warn!("{}: {err}, try again", property.label());
                return Err(err);
            }
        };

        p.values[p.step] = value;
        p.step += 1;
        if p.step < Property::ORDER.len() {
            return Ok(None);
        }

        let [radius, mass, speed, angle_deg, emits] = p.values;
        let request = PlacementRequest {
            at: p.at,
            properties: SphereProperties {
                radius,
                mass,
                speed,
                angle_deg,
                emits_light: emits > 0.0,
            },
        };
        self.pending = None;
        Ok(Some(request))
    }
}

fn parse_number(text: &str) -> SimResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SimError::InvalidNumber(text.to_owned())),
    }
}

/// How a placement request becomes a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRules {
    pub depth_divisor: f64, // z = (height/2 - click_y) / depth_divisor
    pub emitter_color: Rgb,
    pub body_color: Rgb,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            depth_divisor: 3.0,
            emitter_color: Rgb::WHITE,
            body_color: Rgb::GRAY,
        }
    }
}

impl PlacementRules {
    /// Build the body for `req` on a surface of size `viewport`
    pub fn place(&self, req: &PlacementRequest, viewport: &Viewport) -> SimResult<Body> {
        let props = &req.properties;
        let z = (viewport.center().y - req.at.y) / self.depth_divisor;
        let x = NVec3::new(req.at.x, req.at.y, z);
        let color = if props.emits_light { self.emitter_color } else { self.body_color };

        Body::new(x, props.velocity(), props.mass, props.radius, props.emits_light, color)
    }
}
