pub mod combat;
pub mod error;
pub mod event;
pub mod gate;
pub mod input;
pub mod pathing;
pub mod player;
pub mod simulation;
pub mod weapon;
pub mod world;

pub use combat::{DamageDealer, DamageReceiver, HitOutcome};
pub use error::{SimError, SimResult};
pub use event::{DespawnReason, GameEvent};
pub use gate::{GateState, PeriodicActionGate};
pub use input::{ButtonEdges, Buttons, InputFrame, InputTracker};
pub use pathing::{MoveStatus, WaveConfig, WaveSpawner, WaypointMover, move_towards};
pub use player::{MoveBounds, PlayerConfig, PlayerController, PlayerState, Viewport};
pub use simulation::{DeltaTime, FixedTimestep, SimulationLoop, SimulationState};
pub use weapon::{Launcher, SpawnProjectile};
pub use world::{Enemy, EntityId, Projectile, World, WorldConfig, WorldStats};

pub const DEFAULT_TICK_RATE: u32 = 60;
