mod launcher;

pub use launcher::{Launcher, SpawnProjectile};
