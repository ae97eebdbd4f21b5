mod types;

pub use types::{DespawnReason, GameEvent};
