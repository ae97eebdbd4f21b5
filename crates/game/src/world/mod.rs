mod config;
mod entity;
mod state;

pub use config::WorldConfig;
pub use entity::{Enemy, EntityId, Projectile, overlaps};
pub use state::{World, WorldStats};
