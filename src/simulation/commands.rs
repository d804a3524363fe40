//! Host input and the commands it turns into.

use super::placement::PlacementRequest;
use super::states::NVec2;

/// Raw discrete events from the host, drained once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerPress(NVec2), // screen pixels, top-left origin
    Char(char),
    Enter,
    Backspace,
    Quit,
}

/// What the simulation is asked to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Place(PlacementRequest),
    Rotate { yaw: f64, pitch: f64 },
    Quit,
}
