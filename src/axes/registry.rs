//! Process-wide named projection registry.
//!
//! A plot area is requested by string identifier rather than by concrete
//! type, so hosts can select the skew projection the same way they select a
//! stock one. The registry is populated with the built-in `"skewx"`
//! projection on first use; hosts may add their own builders under new
//! names.

use std::sync::{LazyLock, Mutex};

use indexmap::IndexMap;

use crate::api::SkewChartConfig;
use crate::axes::SkewAxes;
use crate::error::{SkewError, SkewResult};

/// Builds a configured plot area for one registered projection.
pub type AxesBuilder = fn(&SkewChartConfig) -> SkewResult<SkewAxes>;

/// Identifier of the built-in skewed X-axis projection.
pub const SKEWX_PROJECTION: &str = "skewx";

static REGISTRY: LazyLock<Mutex<IndexMap<String, AxesBuilder>>> = LazyLock::new(|| {
    let mut builders: IndexMap<String, AxesBuilder> = IndexMap::new();
    builders.insert(SKEWX_PROJECTION.to_owned(), build_skewx);
    Mutex::new(builders)
});

fn build_skewx(config: &SkewChartConfig) -> SkewResult<SkewAxes> {
    SkewAxes::new(
        config.y_scale,
        (config.x_min, config.x_max),
        (config.y_bottom, config.y_top),
        config.shear_deg,
        config.viewport,
        config.x_tick_step,
        config.y_tick_levels.clone(),
    )
}

/// Registers `builder` under `name`, replacing any previous registration.
pub fn register_projection(name: &str, builder: AxesBuilder) {
    let mut registry = REGISTRY.lock().expect("projection registry poisoned");
    registry.insert(name.to_owned(), builder);
}

/// Builds a plot area through the projection registered under `name`.
pub fn build_axes(name: &str, config: &SkewChartConfig) -> SkewResult<SkewAxes> {
    let builder = {
        let registry = REGISTRY.lock().expect("projection registry poisoned");
        registry.get(name).copied()
    };
    match builder {
        Some(builder) => builder(config),
        None => Err(SkewError::UnknownProjection(name.to_owned())),
    }
}

/// Currently registered projection names, in registration order.
#[must_use]
pub fn registered_projections() -> Vec<String> {
    let registry = REGISTRY.lock().expect("projection registry poisoned");
    registry.keys().cloned().collect()
}
