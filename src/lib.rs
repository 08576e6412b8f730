//! skewt-rs: skewed dual-axis charting core for Skew-T log-P diagrams.
//!
//! The crate centers on a plot area whose X axis is sheared at a fixed angle
//! against a log-scaled, inverted pressure axis. The shear makes the top and
//! bottom X axes cover different data ranges, which is what the custom tick,
//! spine, and interval machinery here exists to handle.

pub mod api;
pub mod axes;
pub mod core;
pub mod error;
pub mod render;
pub mod sounding;
pub mod telemetry;

pub use api::{Series, SkewChartConfig, SkewChartEngine};
pub use error::{SkewError, SkewResult};
