//! Drag gesture state machine.
//!
//! The controller consumes the host's gesture stream and turns it into
//! position updates and callback invocations. It never errors: events that
//! arrive out of order (a move or end while idle) are ignored.

use ruler_core::{KnobPosition, Measurement, TrackGeometry};
use std::rc::Rc;

/// A gesture event delivered by the host's gesture-capture mechanism.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// The pointer went down on the knob. No payload.
    Start,
    /// The pointer moved while down, carrying the relative vertical
    /// displacement since the previous move.
    Move { dy: f32 },
    /// The pointer was released. No payload.
    End,
}

/// Where the controller is in the gesture cycle. No terminal state; the
/// machine cycles for the lifetime of the control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Consumes [`DragEvent`]s, mutates the knob position, and pushes the
/// centimeter form of each accepted move to the change callback.
#[derive(Default)]
pub struct DragController {
    phase: DragPhase,
    on_change_value: Option<Rc<dyn Fn(&str)>>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Installs the change callback, invoked with the centimeter string
    /// (e.g. `"182.33 cm"`) on every accepted move.
    pub fn set_on_change_value(&mut self, callback: impl Fn(&str) + 'static) {
        self.on_change_value = Some(Rc::new(callback));
    }

    /// Feeds one gesture event through the state machine.
    ///
    /// Only a move while dragging has an observable side effect beyond the
    /// phase itself: the position is clamped into `[0, length_px]`, and the
    /// callback (if any) receives the recomputed centimeter string. Gesture
    /// end recomputes a final measurement for the log only.
    pub fn handle(&mut self, event: DragEvent, position: &mut KnobPosition, track: &TrackGeometry) {
        match (self.phase, event) {
            (DragPhase::Idle, DragEvent::Start) => {
                self.phase = DragPhase::Dragging;
            }
            (DragPhase::Dragging, DragEvent::Move { dy }) => {
                position.dispatch_raw_delta(dy, track);
                if let Some(callback) = &self.on_change_value {
                    let measurement = Measurement::at(position.value(), track);
                    callback(&measurement.format_cm());
                }
            }
            (DragPhase::Dragging, DragEvent::End) => {
                self.phase = DragPhase::Idle;
                let measurement = Measurement::at(position.value(), track);
                log::info!(
                    "measurement: {} || {}",
                    measurement.format_decimal_feet(),
                    measurement.format_cm()
                );
            }
            (DragPhase::Dragging, DragEvent::Start) => {
                // Already dragging; nothing to restart.
            }
            (DragPhase::Idle, DragEvent::Move { .. }) | (DragPhase::Idle, DragEvent::End) => {
                log::trace!("ignoring out-of-order {event:?} while idle");
            }
        }
    }
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("phase", &self.phase)
            .field("on_change_value", &self.on_change_value.is_some())
            .finish()
    }
}
