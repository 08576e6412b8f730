pub mod registry;
mod skew_axes;
mod spine;
mod tick;

pub use registry::{AxesBuilder, SKEWX_PROJECTION, build_axes, register_projection};
pub use skew_axes::SkewAxes;
pub use spine::Spine;
pub use tick::SkewTick;
