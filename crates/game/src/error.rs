#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {what} must be positive and finite, got {value}")]
    InvalidConfiguration { what: &'static str, value: f32 },
    #[error("invalid tick: elapsed time must be non-negative and finite, got {0}")]
    InvalidTick(f32),
    #[error("padding {padding} leaves no room inside the viewport")]
    InvalidBounds { padding: f32 },
    #[error("invalid damage amount {0}")]
    InvalidDamage(f32),
}

pub type SimResult<T> = Result<T, SimError>;

pub(crate) fn require_positive(what: &'static str, value: f32) -> SimResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidConfiguration { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass_through() {
        assert_eq!(require_positive("speed", 2.5), Ok(2.5));
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert!(require_positive("speed", 0.0).is_err());
        assert!(require_positive("speed", -1.0).is_err());
        assert!(require_positive("speed", f32::NAN).is_err());
        assert!(require_positive("speed", f32::INFINITY).is_err());
    }
}
