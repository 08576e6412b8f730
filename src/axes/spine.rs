use smallvec::SmallVec;

use crate::core::{AxisInterval, DataPoint, Edge};

/// The drawn boundary line for one edge of the plot box.
///
/// The path is kept in data coordinates. The top spine's X coordinates are
/// overwritten on every layout pass to track the upper X interval; the other
/// three edges follow the direct view limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Spine {
    edge: Edge,
    path: SmallVec<[DataPoint; 2]>,
}

impl Spine {
    /// A straight two-point spine along `edge` of the view rectangle.
    #[must_use]
    pub fn linear_spine(edge: Edge, x_limits: (f64, f64), y_limits: (f64, f64)) -> Self {
        let (x0, x1) = x_limits;
        let (y_bottom, y_top) = y_limits;
        let path: SmallVec<[DataPoint; 2]> = match edge {
            Edge::Top => [
                DataPoint::new(x0, y_top),
                DataPoint::new(x1, y_top),
            ]
            .into_iter()
            .collect(),
            Edge::Bottom => [
                DataPoint::new(x0, y_bottom),
                DataPoint::new(x1, y_bottom),
            ]
            .into_iter()
            .collect(),
            Edge::Left => [
                DataPoint::new(x0, y_bottom),
                DataPoint::new(x0, y_top),
            ]
            .into_iter()
            .collect(),
            Edge::Right => [
                DataPoint::new(x1, y_bottom),
                DataPoint::new(x1, y_top),
            ]
            .into_iter()
            .collect(),
        };
        Self { edge, path }
    }

    #[must_use]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[must_use]
    pub fn path(&self) -> &[DataPoint] {
        &self.path
    }

    /// Re-anchors the X spines to the freshly derived intervals.
    ///
    /// The top spine takes `upper` exactly as returned (no sorting), the
    /// bottom spine takes the direct view limits; Y spines are untouched.
    /// Must run after the transform has been rebuilt for this pass.
    pub fn adjust_location(&mut self, lower: AxisInterval, upper: AxisInterval) {
        match self.edge {
            Edge::Top => {
                self.path[0].x = upper.low;
                self.path[1].x = upper.high;
            }
            Edge::Bottom => {
                self.path[0].x = lower.low;
                self.path[1].x = lower.high;
            }
            Edge::Left | Edge::Right => {}
        }
    }
}
