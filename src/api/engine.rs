use tracing::{debug, trace};

use crate::api::SkewChartConfig;
use crate::axes::{SkewAxes, registry};
use crate::core::{DataPoint, Edge, Viewport};
use crate::error::SkewResult;
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const SPINE_STROKE_WIDTH: f64 = 1.5;
const TICK_STROKE_WIDTH: f64 = 1.0;
const TICK_LENGTH_PX: f64 = 6.0;
const GRID_STROKE_WIDTH: f64 = 1.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;
const LABEL_PAD_PX: f64 = 4.0;

const AXIS_COLOR: Color = Color::rgb(0.1, 0.1, 0.1);
const GRID_COLOR: Color = Color::rgba(0.5, 0.5, 0.5, 0.6);

/// One plotted polyline in data coordinates (e.g. a temperature profile).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub points: Vec<DataPoint>,
    pub color: Color,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<DataPoint>, color: Color) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }
}

/// Chart engine tying axes, series, and a rendering backend together.
///
/// Every limit or viewport mutation rebuilds the transform immediately, and
/// each render pass re-derives the X intervals before spines and ticks are
/// emitted, so the frame can never mix geometry from two view states.
#[derive(Debug)]
pub struct SkewChartEngine<R: Renderer> {
    renderer: R,
    config: SkewChartConfig,
    axes: SkewAxes,
    series: Vec<Series>,
}

impl<R: Renderer> SkewChartEngine<R> {
    /// Builds the engine through the projection named in the config
    /// (`"skewx"` unless the host registered something else).
    pub fn new(renderer: R, config: SkewChartConfig) -> SkewResult<Self> {
        let axes = registry::build_axes(&config.projection, &config)?;
        Ok(Self {
            renderer,
            config,
            axes,
            series: Vec::new(),
        })
    }

    #[must_use]
    pub fn axes(&self) -> &SkewAxes {
        &self.axes
    }

    #[must_use]
    pub fn config(&self) -> &SkewChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn add_series(&mut self, series: Series) {
        debug!(points_len = series.points.len(), "series added");
        self.series.push(series);
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
    }

    pub fn set_xlim(&mut self, low: f64, high: f64) -> SkewResult<()> {
        self.axes.set_xlim(low, high)?;
        self.config.x_min = low;
        self.config.x_max = high;
        Ok(())
    }

    pub fn set_ylim(&mut self, bottom: f64, top: f64) -> SkewResult<()> {
        self.axes.set_ylim(bottom, top)?;
        self.config.y_bottom = bottom;
        self.config.y_top = top;
        Ok(())
    }

    pub fn resize(&mut self, viewport: Viewport) -> SkewResult<()> {
        self.axes.resize(viewport)?;
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn map_data_to_pixel(&self, point: DataPoint) -> (f64, f64) {
        self.axes.transform().data_to_device(point)
    }

    #[must_use]
    pub fn map_pixel_to_data(&self, x_px: f64, y_px: f64) -> DataPoint {
        self.axes.transform().device_to_data(x_px, y_px)
    }

    pub fn render(&mut self) -> SkewResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    /// Materializes one draw pass.
    ///
    /// Ordering: spines are re-anchored first (the transform is already
    /// fresh, mutations rebuild it eagerly), then gridlines, ticks, spines,
    /// and series are emitted against the same interval snapshot.
    pub fn build_frame(&mut self) -> RenderFrame {
        self.axes.layout();

        let transform = *self.axes.transform();
        let lower = self.axes.lower_xlim();
        let upper = self.axes.upper_xlim();
        let view = self.axes.view_interval();
        let height_px = f64::from(transform.viewport().height);

        let mut frame = RenderFrame::new(transform.viewport());

        // Vertical gridlines follow the shear but span the full plot box.
        for tick in self.axes.x_ticks() {
            let Some(loc) = tick.location() else {
                continue;
            };
            if tick.grid_visible(view) {
                let (x1, y1) = transform.grid_to_device(loc, 0.0);
                let (x2, y2) = transform.grid_to_device(loc, 1.0);
                frame.push_line(
                    LinePrimitive::new(x1, y1, x2, y2, GRID_STROKE_WIDTH, GRID_COLOR)
                        .with_stroke_style(LineStrokeStyle::Dashed),
                );
            }
        }

        // Horizontal pressure gridlines and their left-edge labels.
        for level in self.axes.visible_y_levels() {
            let y_axes = transform
                .data_to_axes(DataPoint::new(transform.x_limits().0, level))
                .y;
            let (x1, y1) = transform.axes_to_device(0.0, y_axes);
            let (x2, y2) = transform.axes_to_device(1.0, y_axes);
            frame.push_line(
                LinePrimitive::new(x1, y1, x2, y2, GRID_STROKE_WIDTH, GRID_COLOR)
                    .with_stroke_style(LineStrokeStyle::Dashed),
            );
            frame.push_text(TextPrimitive::new(
                format_tick_value(level),
                x1 - LABEL_PAD_PX,
                y1,
                LABEL_FONT_SIZE_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            ));
        }

        // Ticks, each edge gated by its own interval.
        for tick in self.axes.x_ticks() {
            let Some(loc) = tick.location() else {
                continue;
            };
            if tick.bottom_mark_visible(lower) {
                let (x, y) = transform.grid_to_device(loc, 0.0);
                frame.push_line(LinePrimitive::new(
                    x,
                    y,
                    x,
                    y + TICK_LENGTH_PX,
                    TICK_STROKE_WIDTH,
                    AXIS_COLOR,
                ));
            }
            if tick.bottom_label_visible(lower) {
                let (x, _) = transform.grid_to_device(loc, 0.0);
                frame.push_text(TextPrimitive::new(
                    format_tick_value(loc),
                    x,
                    height_px + TICK_LENGTH_PX + LABEL_FONT_SIZE_PX,
                    LABEL_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
            if tick.top_mark_visible(upper) {
                let (x, y) = transform.grid_to_device(loc, 1.0);
                frame.push_line(LinePrimitive::new(
                    x,
                    y,
                    x,
                    y - TICK_LENGTH_PX,
                    TICK_STROKE_WIDTH,
                    AXIS_COLOR,
                ));
            }
            if tick.top_label_visible(upper) {
                let (x, _) = transform.grid_to_device(loc, 1.0);
                frame.push_text(TextPrimitive::new(
                    format_tick_value(loc),
                    x,
                    -(TICK_LENGTH_PX + LABEL_PAD_PX),
                    LABEL_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }

        // Spines: X spines from their (possibly re-anchored) data paths,
        // Y spines as straight box edges.
        for spine in self.axes.spines() {
            let (start, end) = match spine.edge() {
                Edge::Top => (
                    transform.grid_to_device(spine.path()[0].x, 1.0),
                    transform.grid_to_device(spine.path()[1].x, 1.0),
                ),
                Edge::Bottom => (
                    transform.grid_to_device(spine.path()[0].x, 0.0),
                    transform.grid_to_device(spine.path()[1].x, 0.0),
                ),
                Edge::Left => (
                    transform.axes_to_device(0.0, 0.0),
                    transform.axes_to_device(0.0, 1.0),
                ),
                Edge::Right => (
                    transform.axes_to_device(1.0, 0.0),
                    transform.axes_to_device(1.0, 1.0),
                ),
            };
            frame.push_line(LinePrimitive::new(
                start.0,
                start.1,
                end.0,
                end.1,
                SPINE_STROKE_WIDTH,
                AXIS_COLOR,
            ));
        }

        for series in &self.series {
            for pair in series.points.windows(2) {
                let (x1, y1) = transform.data_to_device(pair[0]);
                let (x2, y2) = transform.data_to_device(pair[1]);
                frame.push_line(
                    LinePrimitive::new(x1, y1, x2, y2, series.stroke_width, series.color)
                        .with_stroke_style(series.stroke_style),
                );
            }
        }

        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "frame built"
        );
        frame
    }
}

fn format_tick_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
