//! Testing utilities for the height ruler: synthetic drag sequences and a
//! recording change-callback sink.

use ruler_ui::{DragEvent, RulerSlider};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every value the control pushes through `on_change_value`.
///
/// Clone-cheap: all clones share the same buffer.
#[derive(Clone, Default)]
pub struct RecordingSink {
    values: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback suitable for `RulerSlider::on_change_value`, feeding this
    /// sink.
    pub fn callback(&self) -> impl Fn(&str) + 'static {
        let values = self.values.clone();
        move |value| values.borrow_mut().push(value.to_string())
    }

    pub fn values(&self) -> Vec<String> {
        self.values.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.values.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

/// Feeds a synthetic event sequence into the slider, in order.
pub fn drive(slider: &mut RulerSlider, events: impl IntoIterator<Item = DragEvent>) {
    for event in events {
        slider.handle_drag(event);
    }
}

/// Runs one complete drag session: start, one move per delta, end.
pub fn drag(slider: &mut RulerSlider, deltas: &[f32]) {
    slider.handle_drag(DragEvent::Start);
    for &dy in deltas {
        slider.handle_drag(DragEvent::Move { dy });
    }
    slider.handle_drag(DragEvent::End);
}
