//! Track geometry and resolution of the external height specifier.

use std::str::FromStr;

/// Lower bound of the selectable range, in feet.
///
/// The control is height-bounded by design: it selects a human height, so
/// the range is a domain constant rather than a configuration knob.
pub const MIN_FEET: f32 = 4.0;

/// Upper bound of the selectable range, in feet.
pub const MAX_FEET: f32 = 8.0;

/// Immutable snapshot of the track's coordinate space.
///
/// Holds the track's pixel length and the feet range it represents.
/// A geometry is never mutated in place; layout produces a fresh snapshot
/// on every resolved pixel height, and the knob position is reset alongside
/// the replacement (a stale position under a new scale would misreport).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    length_px: f32,
    min_feet: f32,
    max_feet: f32,
}

impl TrackGeometry {
    /// Creates a geometry for the given pixel length over the fixed
    /// [`MIN_FEET`]..[`MAX_FEET`] range.
    pub const fn new(length_px: f32) -> Self {
        Self {
            length_px,
            min_feet: MIN_FEET,
            max_feet: MAX_FEET,
        }
    }

    /// Track length in pixels.
    pub fn length_px(&self) -> f32 {
        self.length_px
    }

    pub fn min_feet(&self) -> f32 {
        self.min_feet
    }

    pub fn max_feet(&self) -> f32 {
        self.max_feet
    }

    /// Width of the feet range represented by the track.
    pub fn feet_span(&self) -> f32 {
        self.max_feet - self.min_feet
    }

    /// A zero or negative pixel length means layout has not produced a
    /// usable track yet; conversion must not divide by it.
    pub fn is_degenerate(&self) -> bool {
        !(self.length_px > 0.0)
    }
}

/// The externally supplied height specifier for the track.
///
/// Mirrors the control's `height` input: an absolute pixel length, a
/// percentage of the parent's resolved height, or absent (fill parent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightSpec {
    /// Absolute pixel length. Must be positive; non-positive values degrade
    /// to fill-parent at resolution time.
    Px(f32),
    /// Percentage of the parent's resolved pixel height (`75.0` = 75%).
    Percent(f32),
    /// Use the parent's resolved pixel height unchanged.
    FillParent,
}

impl HeightSpec {
    /// Parses a specifier string: `"75%"` is a percentage, a plain number
    /// is an absolute pixel length, anything else falls back to
    /// fill-parent.
    pub fn parse(spec: &str) -> Self {
        let trimmed = spec.trim();
        if let Some(percent) = trimmed.strip_suffix('%') {
            if let Ok(value) = f32::from_str(percent.trim()) {
                return Self::Percent(value);
            }
        } else if let Ok(value) = f32::from_str(trimmed) {
            return Self::Px(value);
        }
        log::warn!("unparseable height specifier {spec:?}, falling back to fill-parent");
        Self::FillParent
    }

    /// Resolves the specifier against the parent's pixel height, producing
    /// the track length in pixels.
    pub fn resolve(&self, parent_px: f32) -> f32 {
        match *self {
            Self::Px(px) if px > 0.0 => px,
            Self::Px(px) => {
                log::warn!("non-positive height {px}px, falling back to fill-parent");
                parent_px
            }
            Self::Percent(percent) => parent_px * percent / 100.0,
            Self::FillParent => parent_px,
        }
    }
}

impl Default for HeightSpec {
    fn default() -> Self {
        Self::FillParent
    }
}

impl From<f32> for HeightSpec {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for HeightSpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_carries_fixed_feet_range() {
        let track = TrackGeometry::new(200.0);
        assert_eq!(track.length_px(), 200.0);
        assert_eq!(track.min_feet(), 4.0);
        assert_eq!(track.max_feet(), 8.0);
        assert_eq!(track.feet_span(), 4.0);
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(TrackGeometry::new(0.0).is_degenerate());
        assert!(TrackGeometry::new(-5.0).is_degenerate());
        assert!(!TrackGeometry::new(1.0).is_degenerate());
    }

    #[test]
    fn test_parse_percent_string() {
        assert_eq!(HeightSpec::parse("75%"), HeightSpec::Percent(75.0));
        assert_eq!(HeightSpec::parse(" 50 %"), HeightSpec::Percent(50.0));
    }

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(HeightSpec::parse("340"), HeightSpec::Px(340.0));
        assert_eq!(HeightSpec::parse("12.5"), HeightSpec::Px(12.5));
    }

    #[test]
    fn test_parse_garbage_falls_back_to_fill_parent() {
        assert_eq!(HeightSpec::parse("tall"), HeightSpec::FillParent);
        assert_eq!(HeightSpec::parse("%"), HeightSpec::FillParent);
        assert_eq!(HeightSpec::parse(""), HeightSpec::FillParent);
    }

    #[test]
    fn test_resolve_percent_of_parent() {
        assert_eq!(HeightSpec::Percent(50.0).resolve(400.0), 200.0);
        assert_eq!(HeightSpec::Percent(100.0).resolve(320.0), 320.0);
    }

    #[test]
    fn test_resolve_absolute_px_ignores_parent() {
        assert_eq!(HeightSpec::Px(240.0).resolve(400.0), 240.0);
    }

    #[test]
    fn test_resolve_fill_parent() {
        assert_eq!(HeightSpec::FillParent.resolve(400.0), 400.0);
    }

    #[test]
    fn test_resolve_non_positive_px_degrades_to_parent() {
        assert_eq!(HeightSpec::Px(0.0).resolve(400.0), 400.0);
        assert_eq!(HeightSpec::Px(-10.0).resolve(400.0), 400.0);
    }
}
