//! Knob position state.

use crate::track::TrackGeometry;

/// The current knob position along the track, in pixels from the top.
///
/// Invariant: `0 <= pos <= length_px` for the geometry the position was last
/// dispatched against. The position is mutated only by the drag controller
/// and reset to `0` whenever the track geometry is replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KnobPosition {
    pos: f32,
}

impl KnobPosition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position in pixels.
    pub fn value(&self) -> f32 {
        self.pos
    }

    /// Applies a relative displacement, clamping to `[0, length_px]`.
    /// Returns the amount actually consumed.
    ///
    /// A degenerate geometry pins the position to `0`.
    pub fn dispatch_raw_delta(&mut self, delta: f32, track: &TrackGeometry) -> f32 {
        let max = track.length_px().max(0.0);
        let new_value = (self.pos + delta).clamp(0.0, max);
        let consumed = new_value - self.pos;
        self.pos = new_value;
        consumed
    }

    /// Forces the position back to the top of the track (the
    /// maximum-height end). Called on every geometry replacement.
    pub fn reset(&mut self) {
        self.pos = 0.0;
    }
}
