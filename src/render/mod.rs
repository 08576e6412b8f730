mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, LineStrokeStyle, TextHAlign, TextPrimitive};

use crate::error::SkewResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from axis geometry and tick logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SkewResult<()>;
}
