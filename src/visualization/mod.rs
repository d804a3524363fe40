pub mod camera;
pub mod renderer;
pub mod viewer;
