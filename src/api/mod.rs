mod engine;
mod engine_config;

pub use engine::{Series, SkewChartEngine};
pub use engine_config::SkewChartConfig;
