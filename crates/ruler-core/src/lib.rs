//! Pure math/data for the height ruler: track geometry, knob position,
//! and position-to-measurement conversion.
//!
//! This crate has no gesture or rendering concerns; it defines the
//! coordinate space of the track and the mapping from a pixel position
//! inside it to a physical height in feet, feet-and-inches, and
//! centimeters.

mod measurement;
mod position;
mod track;

pub use measurement::*;
pub use position::*;
pub use track::*;

pub mod prelude {
    pub use crate::measurement::Measurement;
    pub use crate::position::KnobPosition;
    pub use crate::track::{HeightSpec, TrackGeometry, MAX_FEET, MIN_FEET};
}
