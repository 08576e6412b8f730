pub mod affine;
pub mod interval;
pub mod scale;
pub mod transform;
pub mod types;

pub use affine::Affine2;
pub use interval::{AxisInterval, Edge};
pub use scale::YScale;
pub use transform::SkewTransform;
pub use types::{DataPoint, Viewport};
