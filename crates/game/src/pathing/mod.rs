mod mover;
mod spawner;
mod wave;

pub use mover::{MoveStatus, WaypointMover, move_towards};
pub use spawner::WaveSpawner;
pub use wave::WaveConfig;
