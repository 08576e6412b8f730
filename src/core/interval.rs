use serde::{Deserialize, Serialize};

/// Edge of the plot box an interval, tick side, or spine is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A pair of bounds along one coordinate axis.
///
/// The bounds are kept in the order they were produced. The upper X interval
/// of a skewed axis comes out of an inverse transform, so `low <= high` is
/// not guaranteed; containment treats the pair as unordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInterval {
    pub low: f64,
    pub high: f64,
}

impl AxisInterval {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive containment, accepting the bounds in either order.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        if self.low <= self.high {
            self.low <= value && value <= self.high
        } else {
            self.high <= value && value <= self.low
        }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.low.min(self.high)
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.low.max(self.high)
    }
}
