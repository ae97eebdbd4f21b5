mod bounds;
mod config;
mod controller;
mod state;

pub use bounds::{MoveBounds, Viewport};
pub use config::PlayerConfig;
pub use controller::PlayerController;
pub use state::PlayerState;
