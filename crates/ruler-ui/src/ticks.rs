//! Tick-mark layout model.
//!
//! Pure layout data for an external renderer: where the ruler lines sit and
//! how wide each is relative to the track. No drawing happens here.

use ruler_core::TrackGeometry;
use smallvec::SmallVec;

/// Vertical pitch between adjacent ruler lines, in pixels.
pub const TICK_PITCH_PX: f32 = 10.0;

/// Every n-th line is a major tick.
pub const MAJOR_TICK_INTERVAL: usize = 5;

/// Thickness of the knob indicator line, in pixels.
pub const INDICATOR_THICKNESS_PX: f32 = 2.0;

/// How far above the knob the floating value label sits, in pixels.
pub const LABEL_LIFT_PX: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    Major,
    Minor,
}

impl TickKind {
    /// Tick width as a fraction of the track width: major lines reach
    /// halfway across, minor lines a quarter.
    pub fn width_fraction(&self) -> f32 {
        match self {
            Self::Major => 0.5,
            Self::Minor => 0.25,
        }
    }
}

/// One ruler line, positioned from the top of the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    pub offset_px: f32,
    pub kind: TickKind,
}

/// Computes the ruler lines for the given track: one every
/// [`TICK_PITCH_PX`] starting at the top, every [`MAJOR_TICK_INTERVAL`]-th
/// major. A degenerate track has no ticks.
pub fn tick_marks(track: &TrackGeometry) -> SmallVec<[TickMark; 32]> {
    if track.is_degenerate() {
        return SmallVec::new();
    }
    let count = (track.length_px() / TICK_PITCH_PX).floor() as usize;
    (0..count)
        .map(|index| TickMark {
            offset_px: index as f32 * TICK_PITCH_PX,
            kind: if index % MAJOR_TICK_INTERVAL == 0 {
                TickKind::Major
            } else {
                TickKind::Minor
            },
        })
        .collect()
}

/// Where the floating value label sits for a given knob position.
pub fn label_offset_px(knob_pos: f32) -> f32 {
    knob_pos - LABEL_LIFT_PX
}
