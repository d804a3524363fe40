//! The simulation context owned by the frame loop
//!
//! `Scenario` bundles everything a frame touches:
//! - runtime parameters and the force/contact model built from them
//! - the body collection (`System`)
//! - camera, viewport and lighting settings
//! - the in-progress sphere placement, if any
//!
//! It is built from a [`SimConfig`] and inserted into Bevy as a `Resource`,
//! but nothing in here needs a running app; tests drive it directly.

use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;

use crate::configuration::config::{PlacementConfig, SimConfig};
use crate::error::SimResult;
use crate::visualization::camera::{Camera, RotationInput};
use crate::visualization::renderer::{render_frame, Frame, LightingParams};
use super::commands::{Command, InputEvent};
use super::forces::ForceModel;
use super::integrator::euler_integrator;
use super::params::Parameters;
use super::placement::{PlacementRequest, PlacementRules, PropertyCapture, SphereProperties};
use super::states::{BodyId, NVec2, Rgb, System, Viewport};

/// What one call to [`Scenario::frame`] produced
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    pub frame: Frame,
    pub impulses: usize, // contact impulses applied this frame
    pub quit: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub forces: ForceModel,
    pub system: System,
    pub camera: Camera,
    pub viewport: Viewport,
    pub lighting: LightingParams,
    pub placement: PlacementRules,
    pub capture: PropertyCapture,
    pub background: Rgb,
}

impl Default for Scenario {
    fn default() -> Self {
        let parameters = Parameters::default();
        Self {
            forces: ForceModel::new(&parameters),
            parameters,
            system: System::new(),
            camera: Camera::default(),
            viewport: Viewport::default(),
            lighting: LightingParams::default(),
            placement: PlacementRules::default(),
            capture: PropertyCapture::new(),
            background: Rgb::BLACK,
        }
    }
}

impl Scenario {
    /// Map the YAML-facing config to runtime state and place its spheres
    pub fn build_scenario(cfg: &SimConfig) -> SimResult<Self> {
        let parameters = Parameters {
            g: cfg.physics.g,
            restitution: cfg.physics.restitution,
            max_dt: cfg.physics.max_dt,
        };

        let mut scenario = Self {
            forces: ForceModel::new(&parameters),
            parameters,
            system: System::new(),
            camera: Camera::new(cfg.camera.rotation_speed),
            viewport: Viewport::new(cfg.window.width as f64, cfg.window.height as f64),
            lighting: LightingParams { layers: cfg.lighting.layers },
            placement: PlacementRules {
                depth_divisor: cfg.camera.depth_divisor,
                emitter_color: cfg.lighting.emitter_color.into(),
                body_color: cfg.lighting.body_color.into(),
            },
            capture: PropertyCapture::new(),
            background: cfg.lighting.background.into(),
        };

        for pc in &cfg.placements {
            scenario.place(&placement_request(pc))?;
        }

        info!("scenario ready with {} bodies", scenario.system.len());
        Ok(scenario)
    }

    /// Create a body from a finished placement
    pub fn place(&mut self, req: &PlacementRequest) -> SimResult<BodyId> {
        let body = self.placement.place(req, &self.viewport)?;
        let id = self.system.insert(body);
        info!(
            "placed sphere {} at ({:.0}, {:.0}): r = {}, m = {}, emits light = {}",
            id.0, req.at.x, req.at.y, req.properties.radius, req.properties.mass, req.properties.emits_light
        );
        Ok(id)
    }

    /// Feed one raw event through the placement prompt
    pub fn handle_input(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Quit => return Some(Command::Quit),
            InputEvent::PointerPress(at) => {
                if self.capture.begin(at) {
                    debug!("capturing sphere properties for click at ({}, {})", at.x, at.y);
                }
            }
            // Typing outside a capture is ignored
            InputEvent::Char(_) | InputEvent::Backspace if !self.capture.is_active() => {}
            InputEvent::Char(c) => {
                if let Err(err) = self.capture.push_char(c) {
                    warn!("keystroke dropped: {err}");
                }
            }
            InputEvent::Backspace => {
                if let Err(err) = self.capture.backspace() {
                    warn!("keystroke dropped: {err}");
                }
            }
            InputEvent::Enter => {
                if let Ok(Some(req)) = self.capture.enter() {
                    return Some(Command::Place(req));
                }
            }
        }
        None
    }

    /// Apply a command; returns `true` when the loop should stop
    pub fn apply(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Place(req) => {
                if let Err(err) = self.place(&req) {
                    warn!("sphere not placed: {err}");
                }
                false
            }
            Command::Rotate { yaw, pitch } => {
                self.camera.rotate(yaw, pitch);
                false
            }
            Command::Quit => {
                info!("quit requested");
                true
            }
        }
    }

    /// Force + contact pass, then Euler integration. Returns the impulse count.
    pub fn step(&mut self, raw_dt: f64) -> usize {
        let impulses = self.forces.accumulate(&mut self.system);
        euler_integrator(&mut self.system, self.parameters.step_dt(raw_dt));
        impulses
    }

    /// Draw list for the current state
    pub fn render(&self) -> Frame {
        render_frame(&self.system, &self.camera, &self.viewport, &self.lighting)
    }

    /// One full frame in fixed order: drain input, forces and contacts,
    /// integrate, turn the camera, then transform, sort and draw.
    ///
    /// A quit still finishes the current frame.
    pub fn frame<I>(&mut self, events: I, held: RotationInput, raw_dt: f64) -> FrameOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut quit = false;
        for event in events {
            if let Some(cmd) = self.handle_input(event) {
                quit |= self.apply(cmd);
            }
        }

        let impulses = self.step(raw_dt);
        let (yaw, pitch) = self.camera.input_delta(held);
        if yaw != 0.0 || pitch != 0.0 {
            self.apply(Command::Rotate { yaw, pitch });
        }

        FrameOutcome {
            frame: self.render(),
            impulses,
            quit,
        }
    }

    /// Text for the property prompt, while a placement is in progress
    pub fn prompt(&self) -> Option<String> {
        self.capture.prompt()
    }
}

fn placement_request(pc: &PlacementConfig) -> PlacementRequest {
    PlacementRequest {
        at: NVec2::new(pc.at[0], pc.at[1]),
        properties: SphereProperties {
            radius: pc.radius,
            mass: pc.mass,
            speed: pc.speed,
            angle_deg: pc.angle,
            emits_light: pc.emits_light,
        },
    }
}
