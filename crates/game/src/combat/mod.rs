mod health;

pub use health::{DamageDealer, DamageReceiver, HitOutcome};
