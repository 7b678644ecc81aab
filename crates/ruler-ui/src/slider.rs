//! The `RulerSlider` control.

use crate::drag::{DragController, DragEvent, DragPhase};
use ruler_core::{HeightSpec, KnobPosition, Measurement, TrackGeometry};

/// A vertical draggable ruler for selecting a human height.
///
/// Owns the `(TrackGeometry, KnobPosition)` pair exclusively; every layout
/// pass replaces the geometry wholesale and resets the position, and every
/// drag event flows through the controller. All work is synchronous inside
/// the handler for the current event.
#[derive(Debug)]
pub struct RulerSlider {
    height: HeightSpec,
    track: TrackGeometry,
    position: KnobPosition,
    controller: DragController,
}

impl RulerSlider {
    /// Creates a slider with no resolved layout yet. The track stays
    /// degenerate (no valid measurement) until [`on_layout`] runs.
    ///
    /// [`on_layout`]: Self::on_layout
    pub fn new() -> Self {
        Self {
            height: HeightSpec::FillParent,
            track: TrackGeometry::new(0.0),
            position: KnobPosition::new(),
            controller: DragController::new(),
        }
    }

    /// Sets the height specifier resolved against the parent on each layout
    /// pass. Accepts anything convertible: `240.0`, `"75%"`, or
    /// [`HeightSpec`] directly.
    pub fn height(mut self, spec: impl Into<HeightSpec>) -> Self {
        self.height = spec.into();
        self
    }

    /// Installs the change callback, invoked with the centimeter string on
    /// every accepted drag move.
    pub fn on_change_value(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.controller.set_on_change_value(callback);
        self
    }

    /// Handles a layout pass: resolves the height specifier against the
    /// parent's pixel height, replaces the track geometry, and resets the
    /// knob to the top. Runs on the initial layout and on every resize.
    pub fn on_layout(&mut self, parent_px: f32) {
        let length_px = self.height.resolve(parent_px);
        self.track = TrackGeometry::new(length_px);
        self.position.reset();
    }

    /// Feeds one gesture event from the host into the drag state machine.
    pub fn handle_drag(&mut self, event: DragEvent) {
        self.controller.handle(event, &mut self.position, &self.track);
    }

    pub fn track(&self) -> &TrackGeometry {
        &self.track
    }

    /// Current knob position in pixels from the top of the track.
    pub fn position(&self) -> f32 {
        self.position.value()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.phase() == DragPhase::Dragging
    }

    /// The measurement at the current knob position. Recomputed on every
    /// call; never cached.
    pub fn measurement(&self) -> Measurement {
        Measurement::at(self.position.value(), &self.track)
    }
}

impl Default for RulerSlider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_resolves_percent_height() {
        let mut slider = RulerSlider::new().height("50%");
        slider.on_layout(400.0);
        assert_eq!(slider.track().length_px(), 200.0);
    }

    #[test]
    fn test_layout_resolves_absolute_height() {
        let mut slider = RulerSlider::new().height(240.0);
        slider.on_layout(400.0);
        assert_eq!(slider.track().length_px(), 240.0);
    }

    #[test]
    fn test_layout_defaults_to_fill_parent() {
        let mut slider = RulerSlider::new();
        slider.on_layout(400.0);
        assert_eq!(slider.track().length_px(), 400.0);
    }

    #[test]
    fn test_resize_resets_position() {
        let mut slider = RulerSlider::new();
        slider.on_layout(200.0);
        slider.handle_drag(DragEvent::Start);
        slider.handle_drag(DragEvent::Move { dy: 80.0 });
        slider.handle_drag(DragEvent::End);
        assert_eq!(slider.position(), 80.0);

        slider.on_layout(400.0);
        assert_eq!(slider.position(), 0.0);
        assert_eq!(slider.track().length_px(), 400.0);
    }

    #[test]
    fn test_measurement_before_layout_reports_range_minimum() {
        let slider = RulerSlider::new();
        assert!(slider.track().is_degenerate());
        assert_eq!(slider.measurement().decimal_feet, 4.0);
    }

    #[test]
    fn test_measurement_reflects_current_position() {
        let mut slider = RulerSlider::new();
        slider.on_layout(200.0);
        slider.handle_drag(DragEvent::Start);
        slider.handle_drag(DragEvent::Move { dy: 100.0 });

        let m = slider.measurement();
        assert_eq!(m.format_decimal_feet(), "6.00000 ft");
        assert_eq!(m.format_feet_inches(), "6'0\"");
        assert!(slider.is_dragging());
    }
}
