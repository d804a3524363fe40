pub mod states;
pub mod params;
pub mod forces;
pub mod collision;
pub mod integrator;
pub mod placement;
pub mod commands;
pub mod scenario;
