//! Support for hand-copied sounding text and profile containers.

mod parse;
mod profile;

pub use parse::parse_spaced_numbers;
pub use profile::{SoundingProfile, SoundingTrace};
