//! Position-to-measurement conversion.
//!
//! The mapping is inverted relative to the pixel axis: the ruler is drawn
//! top-down with "taller" at the top, so position `0` yields the maximum
//! height and position `length_px` the minimum.

use crate::track::TrackGeometry;

/// Centimeters per foot.
pub const CM_PER_FOOT: f32 = 30.48;

/// A height derived from a knob position, in all three measurement systems.
///
/// Measurements are ephemeral: recomputed on demand from the current
/// position and geometry, handed to the caller, and discarded. They are
/// never cached, so they can never go stale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Height as a single floating-point number of feet.
    pub decimal_feet: f32,
    /// Whole feet component of the feet-and-inches form.
    pub feet: i32,
    /// Inch remainder, `0..=11` (rounding at the top of a foot carries into
    /// `feet`).
    pub inches: i32,
    /// Height in centimeters.
    pub cm: f32,
}

impl Measurement {
    /// Converts a knob position into a measurement, given the track
    /// geometry.
    ///
    /// Pure and deterministic. The position is clamped defensively into
    /// `[0, length_px]` so every derived form sees the same value even if
    /// the caller slipped past the drag handler's own clamp. A degenerate
    /// geometry (zero-width track) reports the range minimum rather than
    /// propagating NaN from the division.
    pub fn at(pos: f32, track: &TrackGeometry) -> Self {
        let decimal_feet = if track.is_degenerate() {
            log::warn!(
                "measuring against a degenerate track ({}px), reporting range minimum",
                track.length_px()
            );
            track.min_feet()
        } else {
            let length = track.length_px();
            let pos = pos.clamp(0.0, length);
            track.min_feet() + ((length - pos) / length) * track.feet_span()
        };

        let mut feet = decimal_feet.floor() as i32;
        let mut inches = ((decimal_feet - feet as f32) * 12.0).round() as i32;
        // Rounding half an inch below a whole foot lands on 12; carry it.
        if inches == 12 {
            feet += 1;
            inches = 0;
        }

        Self {
            decimal_feet,
            feet,
            inches,
            cm: decimal_feet * CM_PER_FOOT,
        }
    }

    /// Decimal-feet form, e.g. `"6.00000 ft"`.
    pub fn format_decimal_feet(&self) -> String {
        format!("{:.5} ft", self.decimal_feet)
    }

    /// Feet-and-inches form, e.g. `"6'0\""`.
    pub fn format_feet_inches(&self) -> String {
        format!("{}'{}\"", self.feet, self.inches)
    }

    /// Centimeter form, e.g. `"182.88 cm"`.
    pub fn format_cm(&self) -> String {
        format!("{:.2} cm", self.cm)
    }
}
