pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyId, System, Rgb, Viewport, NVec2, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{ForceModel, NewtonianGravity};
pub use simulation::collision::ImpulseResolver;
pub use simulation::integrator::euler_integrator;
pub use simulation::placement::{PlacementRequest, PlacementRules, Property, PropertyCapture, SphereProperties};
pub use simulation::commands::{Command, InputEvent};
pub use simulation::scenario::{FrameOutcome, Scenario};

pub use configuration::config::{SimConfig, WindowConfig, PhysicsConfig, CameraConfig, LightingConfig, PlacementConfig};

pub use visualization::camera::{depth_sort, Camera, RotationInput, ViewBody};
pub use visualization::renderer::{light_direction, lit_layers, render_frame, DrawCall, Frame, LightingParams};
pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_forces, bench_frame};
