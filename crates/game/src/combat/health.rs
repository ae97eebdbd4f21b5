use crate::error::{SimError, SimResult, require_positive};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    Survived { remaining: f32 },
    /// Health reached zero on this hit. The owner removes the entity.
    Destroyed,
    /// The receiver was already destroyed; the hit had no effect.
    AlreadyDestroyed,
}

impl HitOutcome {
    pub fn is_destroyed(self) -> bool {
        self == Self::Destroyed
    }
}

/// Something that deals a fixed amount of damage on contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageDealer {
    damage: f32,
}

impl DamageDealer {
    pub fn new(damage: f32) -> SimResult<Self> {
        if damage.is_finite() && damage >= 0.0 {
            Ok(Self { damage })
        } else {
            Err(SimError::InvalidDamage(damage))
        }
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }
}

#[derive(Debug, Clone)]
pub struct DamageReceiver {
    max_health: f32,
    health: f32,
}

impl DamageReceiver {
    pub fn new(health: f32) -> SimResult<Self> {
        let health = require_positive("health", health)?;
        Ok(Self {
            max_health: health,
            health,
        })
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    pub fn take_hit(&mut self, dealer: DamageDealer) -> HitOutcome {
        if self.is_destroyed() {
            return HitOutcome::AlreadyDestroyed;
        }
        self.health -= dealer.damage();
        if self.is_destroyed() {
            HitOutcome::Destroyed
        } else {
            HitOutcome::Survived {
                remaining: self.health,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(amount: f32) -> DamageDealer {
        DamageDealer::new(amount).unwrap()
    }

    #[test]
    fn destroyed_at_exactly_zero() {
        let mut receiver = DamageReceiver::new(200.0).unwrap();
        assert_eq!(
            receiver.take_hit(hit(150.0)),
            HitOutcome::Survived { remaining: 50.0 }
        );
        assert_eq!(receiver.take_hit(hit(50.0)), HitOutcome::Destroyed);
        assert!(receiver.is_destroyed());
    }

    #[test]
    fn destroyed_below_zero_reported_once() {
        let mut receiver = DamageReceiver::new(10.0).unwrap();
        assert!(receiver.take_hit(hit(25.0)).is_destroyed());
        assert_eq!(receiver.take_hit(hit(1.0)), HitOutcome::AlreadyDestroyed);
        assert_eq!(receiver.health(), -15.0);
    }

    #[test]
    fn zero_damage_is_harmless() {
        let mut receiver = DamageReceiver::new(1.0).unwrap();
        assert_eq!(
            receiver.take_hit(hit(0.0)),
            HitOutcome::Survived { remaining: 1.0 }
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(DamageReceiver::new(0.0).is_err());
        assert_eq!(DamageDealer::new(-5.0), Err(SimError::InvalidDamage(-5.0)));
    }
}
