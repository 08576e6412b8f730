//! Renders a small Skew-T frame from hand-copied sounding text and prints
//! the primitive counts plus the two X-axis windows.

use skewt_rs::core::Viewport;
use skewt_rs::render::{Color, LineStrokeStyle, NullRenderer};
use skewt_rs::sounding::SoundingProfile;
use skewt_rs::{Series, SkewChartConfig, SkewChartEngine};

const PRESSURE: &str = "9 6 1 . 0   8 5 0 . 0   7 0 0 . 0   5 0 0 . 0   3 0 0 . 0   2 0 0 . 0";
const TEMPERATURE: &str =
    "2 7 9 . 5 5   2 7 4 . 7 5   2 6 6 . 8 5   2 4 9 . 6 5   2 2 4 . 6 5   2 1 2 . 2 5";
const DEW_POINT: &str =
    "2 7 8 . 1 5   2 7 3 . 3 5   2 6 2 . 8 5   2 4 3 . 0 5   2 1 4 . 6 5   2 0 3 . 2 5";

fn main() -> skewt_rs::SkewResult<()> {
    let _ = skewt_rs::telemetry::init_default_tracing();

    let profile = SoundingProfile::from_spaced_text(PRESSURE, TEMPERATURE, PRESSURE, DEW_POINT)?;

    let config = SkewChartConfig::new(Viewport::new(1000, 1000), -50.0, 50.0, 1050.0, 100.0);
    let mut engine = SkewChartEngine::new(NullRenderer::default(), config)?;

    engine.add_series(Series::new(
        profile.temperature.series_points(),
        Color::rgb(0.8, 0.2, 0.2),
    ));
    engine.add_series(
        Series::new(profile.dew_point.series_points(), Color::rgb(0.2, 0.6, 0.2))
            .with_stroke_style(LineStrokeStyle::Dashed),
    );

    engine.render()?;

    let lower = engine.axes().lower_xlim();
    let upper = engine.axes().upper_xlim();
    println!(
        "bottom axis: [{:.1}, {:.1}] C, top axis: [{:.1}, {:.1}] C",
        lower.low, lower.high, upper.low, upper.high
    );
    println!(
        "frame: {} lines, {} labels",
        engine.renderer().last_line_count,
        engine.renderer().last_text_count
    );

    Ok(())
}
