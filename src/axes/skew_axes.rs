use tracing::debug;

use crate::axes::spine::Spine;
use crate::axes::tick::SkewTick;
use crate::core::{AxisInterval, DataPoint, Edge, SkewTransform, Viewport, YScale};
use crate::error::{SkewError, SkewResult};

/// A plot area with a sheared X axis over a (usually log, usually inverted)
/// Y axis.
///
/// Owns the composed transform and the four edge spines, and derives the two
/// independent X intervals the ticks and spines render against. The transform
/// is rebuilt eagerly on every limit or viewport change; the intervals are
/// recomputed on each query so they can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct SkewAxes {
    transform: SkewTransform,
    x_tick_step: f64,
    y_tick_levels: Vec<f64>,
    spines: Vec<Spine>,
}

impl SkewAxes {
    pub fn new(
        y_scale: YScale,
        x_limits: (f64, f64),
        y_limits: (f64, f64),
        shear_deg: f64,
        viewport: Viewport,
        x_tick_step: f64,
        y_tick_levels: Vec<f64>,
    ) -> SkewResult<Self> {
        if !x_tick_step.is_finite() || x_tick_step <= 0.0 {
            return Err(SkewError::InvalidData(
                "x tick step must be finite and > 0".to_owned(),
            ));
        }
        for level in &y_tick_levels {
            if !level.is_finite() {
                return Err(SkewError::InvalidData(
                    "y tick levels must be finite".to_owned(),
                ));
            }
        }

        let transform = SkewTransform::new(y_scale, x_limits, y_limits, shear_deg, viewport)?;
        let spines = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right]
            .into_iter()
            .map(|edge| Spine::linear_spine(edge, x_limits, y_limits))
            .collect();

        let mut axes = Self {
            transform,
            x_tick_step,
            y_tick_levels,
            spines,
        };
        axes.layout();
        Ok(axes)
    }

    #[must_use]
    pub fn transform(&self) -> &SkewTransform {
        &self.transform
    }

    /// The bottom edge's X data range: the view limits, untransformed.
    #[must_use]
    pub fn lower_xlim(&self) -> AxisInterval {
        let (low, high) = self.transform.x_limits();
        AxisInterval::new(low, high)
    }

    /// The top edge's X data range, derived from the current transform.
    ///
    /// The two ends of the top edge of the unit square are pulled backward
    /// through the pre-viewport transform; their X components form the
    /// interval, in the order the inverse map produces them.
    #[must_use]
    pub fn upper_xlim(&self) -> AxisInterval {
        let left = self.transform.axes_to_data(DataPoint::new(0.0, 1.0));
        let right = self.transform.axes_to_data(DataPoint::new(1.0, 1.0));
        AxisInterval::new(left.x, right.x)
    }

    /// Total X view interval: spans from the top edge's low bound to the
    /// bottom edge's high bound, covering both displayed edges.
    #[must_use]
    pub fn view_interval(&self) -> AxisInterval {
        AxisInterval::new(self.upper_xlim().low, self.lower_xlim().high)
    }

    pub fn set_xlim(&mut self, low: f64, high: f64) -> SkewResult<()> {
        self.rebuild(
            self.transform.y_scale(),
            (low, high),
            self.transform.y_limits(),
            self.transform.viewport(),
        )
    }

    /// Sets the Y view limits as `(bottom-edge value, top-edge value)`; pass
    /// them high-to-low for an inverted pressure axis.
    pub fn set_ylim(&mut self, bottom: f64, top: f64) -> SkewResult<()> {
        self.rebuild(
            self.transform.y_scale(),
            self.transform.x_limits(),
            (bottom, top),
            self.transform.viewport(),
        )
    }

    pub fn resize(&mut self, viewport: Viewport) -> SkewResult<()> {
        self.rebuild(
            self.transform.y_scale(),
            self.transform.x_limits(),
            self.transform.y_limits(),
            viewport,
        )
    }

    fn rebuild(
        &mut self,
        y_scale: YScale,
        x_limits: (f64, f64),
        y_limits: (f64, f64),
        viewport: Viewport,
    ) -> SkewResult<()> {
        self.transform = SkewTransform::new(
            y_scale,
            x_limits,
            y_limits,
            self.transform.shear_deg(),
            viewport,
        )?;
        for spine in &mut self.spines {
            *spine = Spine::linear_spine(spine.edge(), x_limits, y_limits);
        }
        self.layout();
        debug!(
            x_low = x_limits.0,
            x_high = x_limits.1,
            y_bottom = y_limits.0,
            y_top = y_limits.1,
            "skew axes rebuilt"
        );
        Ok(())
    }

    /// Re-anchors the spines against the freshly derived intervals.
    ///
    /// Runs automatically after every rebuild; render passes may call it
    /// again, it is idempotent for an unchanged transform.
    pub fn layout(&mut self) {
        let lower = self.lower_xlim();
        let upper = self.upper_xlim();
        for spine in &mut self.spines {
            spine.adjust_location(lower, upper);
        }
    }

    #[must_use]
    pub fn spines(&self) -> &[Spine] {
        &self.spines
    }

    #[must_use]
    pub fn spine(&self, edge: Edge) -> &Spine {
        self.spines
            .iter()
            .find(|spine| spine.edge() == edge)
            .expect("all four edges are always present")
    }

    /// Generates ticks at multiples of the configured step across the total
    /// view interval, so candidates exist for both displayed edges. Per-edge
    /// visibility is decided later by each tick.
    #[must_use]
    pub fn x_ticks(&self) -> Vec<SkewTick> {
        let view = self.view_interval();
        let step = self.x_tick_step;
        let first = (view.min() / step).ceil() as i64;
        let last = (view.max() / step).floor() as i64;
        (first..=last)
            .map(|index| SkewTick::new(Some(index as f64 * step)))
            .collect()
    }

    #[must_use]
    pub fn x_tick_step(&self) -> f64 {
        self.x_tick_step
    }

    /// Y graduations currently inside the Y view range.
    #[must_use]
    pub fn visible_y_levels(&self) -> Vec<f64> {
        let (bottom, top) = self.transform.y_limits();
        let range = AxisInterval::new(bottom, top);
        self.y_tick_levels
            .iter()
            .copied()
            .filter(|level| range.contains(*level))
            .collect()
    }
}
