//! Per-edge tick visibility for the skewed X axis.
//!
//! The sheared top axis can show a different numeric span than the bottom
//! axis for the same pixel column, so top and bottom marks are each gated by
//! their own edge's data range. Visibility is always computed on query from
//! (own flags, location, current intervals); nothing is cached.

use crate::core::AxisInterval;

/// One X-axis graduation.
///
/// `location == None` means "use default placement": such a tick is eligible
/// for both edges and for the gridline unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewTick {
    location: Option<f64>,
    bottom_mark_enabled: bool,
    bottom_label_enabled: bool,
    top_mark_enabled: bool,
    top_label_enabled: bool,
    grid_enabled: bool,
}

impl SkewTick {
    #[must_use]
    pub const fn new(location: Option<f64>) -> Self {
        Self {
            location,
            bottom_mark_enabled: true,
            bottom_label_enabled: true,
            top_mark_enabled: true,
            top_label_enabled: true,
            grid_enabled: true,
        }
    }

    #[must_use]
    pub const fn with_bottom_mark_enabled(mut self, enabled: bool) -> Self {
        self.bottom_mark_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn with_bottom_label_enabled(mut self, enabled: bool) -> Self {
        self.bottom_label_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn with_top_mark_enabled(mut self, enabled: bool) -> Self {
        self.top_mark_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn with_top_label_enabled(mut self, enabled: bool) -> Self {
        self.top_label_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn with_grid_enabled(mut self, enabled: bool) -> Self {
        self.grid_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn location(self) -> Option<f64> {
        self.location
    }

    #[must_use]
    pub const fn has_default_location(self) -> bool {
        self.location.is_none()
    }

    /// Is this tick inside the bottom edge's data range?
    #[must_use]
    pub fn needs_lower(self, lower: AxisInterval) -> bool {
        match self.location {
            None => true,
            Some(loc) => lower.contains(loc),
        }
    }

    /// Is this tick inside the top edge's derived data range?
    #[must_use]
    pub fn needs_upper(self, upper: AxisInterval) -> bool {
        match self.location {
            None => true,
            Some(loc) => upper.contains(loc),
        }
    }

    #[must_use]
    pub fn bottom_mark_visible(self, lower: AxisInterval) -> bool {
        self.bottom_mark_enabled && self.needs_lower(lower)
    }

    #[must_use]
    pub fn bottom_label_visible(self, lower: AxisInterval) -> bool {
        self.bottom_label_enabled && self.needs_lower(lower)
    }

    #[must_use]
    pub fn top_mark_visible(self, upper: AxisInterval) -> bool {
        self.top_mark_enabled && self.needs_upper(upper)
    }

    #[must_use]
    pub fn top_label_visible(self, upper: AxisInterval) -> bool {
        self.top_label_enabled && self.needs_upper(upper)
    }

    /// Gridlines span both edges, so they are gated by the combined view
    /// interval rather than either edge's own range.
    #[must_use]
    pub fn grid_visible(self, view: AxisInterval) -> bool {
        self.grid_enabled
            && match self.location {
                None => true,
                Some(loc) => view.contains(loc),
            }
    }
}

#[cfg(test)]
mod tests {
    use super::SkewTick;
    use crate::core::AxisInterval;

    #[test]
    fn default_location_is_always_eligible() {
        let tick = SkewTick::new(None);
        let empty_side = AxisInterval::new(5.0, 6.0);
        assert!(tick.needs_lower(empty_side));
        assert!(tick.needs_upper(empty_side));
        assert!(tick.grid_visible(empty_side));
    }

    #[test]
    fn disabled_flags_override_containment() {
        let lower = AxisInterval::new(-50.0, 50.0);
        let tick = SkewTick::new(Some(0.0))
            .with_bottom_mark_enabled(false)
            .with_bottom_label_enabled(false);
        assert!(tick.needs_lower(lower));
        assert!(!tick.bottom_mark_visible(lower));
        assert!(!tick.bottom_label_visible(lower));
    }
}
