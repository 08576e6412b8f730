use serde::{Deserialize, Serialize};

use crate::error::{SkewError, SkewResult};

/// Mapping mode used for the Y (pressure) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum YScale {
    /// Uniform spacing in raw data units.
    Linear,
    /// Uniform spacing in base-10 log units (all values must be > 0).
    /// This is the standard choice for pressure on a Skew-T log-P diagram.
    #[default]
    Log10,
}

impl YScale {
    /// Maps a data value into scaled space.
    #[must_use]
    pub fn forward(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log10 => value.log10(),
        }
    }

    /// Maps a scaled value back into data space.
    #[must_use]
    pub fn inverse(self, scaled: f64) -> f64 {
        match self {
            Self::Linear => scaled,
            Self::Log10 => 10.0_f64.powf(scaled),
        }
    }

    /// Validates a pair of view limits against this scale's domain.
    ///
    /// Limits may arrive in either order (an inverted axis passes them
    /// high-to-low); only finiteness, non-degeneracy, and positivity for the
    /// log scale are checked here.
    pub fn check_limits(self, first: f64, second: f64) -> SkewResult<()> {
        if !first.is_finite() || !second.is_finite() || first == second {
            return Err(SkewError::InvalidData(
                "scale limits must be finite and non-degenerate".to_owned(),
            ));
        }

        if self == Self::Log10 && (first <= 0.0 || second <= 0.0) {
            return Err(SkewError::InvalidData(
                "log scale limits must be > 0".to_owned(),
            ));
        }

        Ok(())
    }
}
