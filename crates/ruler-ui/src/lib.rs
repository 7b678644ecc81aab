//! The height ruler control: drag event handling, tick layout data, and the
//! `RulerSlider` that ties geometry, position, and the change callback
//! together.
//!
//! Rendering and gesture capture stay with the host. The host delivers
//! [`DragEvent`]s (start, relative vertical move, end) and a resolved parent
//! pixel height per layout pass; the control reports centimeter strings
//! through the `on_change_value` callback on every accepted move.

mod drag;
mod slider;
mod ticks;

pub use drag::*;
pub use slider::*;
pub use ticks::*;

pub mod prelude {
    pub use crate::drag::{DragController, DragEvent, DragPhase};
    pub use crate::slider::RulerSlider;
    pub use crate::ticks::{tick_marks, TickKind, TickMark};
    pub use ruler_core::prelude::*;
}
