//! Widget kinds and their dwell hooks
//!
//! Every kind reacts to the same three moments of the dwell state machine:
//!
//! - `on_inactive`: the pointer left (or tracking was lost)
//! - `on_active_update`: the pointer arrived or moved past the stillness radius
//! - `on_commit`: the pointer stayed still long enough; build the payload
//!
//! [`WidgetBehavior`] is the closed set of built-in kinds and dispatches by
//! `match`. New kinds implement [`DwellHooks`] and get a variant here.

pub mod button;
pub mod dial;
pub mod slider;

pub use button::Button;
pub use dial::Dial;
pub use slider::{Orientation, Slider, SliderConfig};

use crate::geometry::{Point, Size};
use crate::info::{WidgetInfo, WidgetKind};

/// Kind-specific reactions to dwell state changes
pub trait DwellHooks {
    /// Pointer gone. Forget transient state, keep values the user set.
    fn on_inactive(&mut self) {}

    /// Pointer at a new widget-local position. `bounds` is the widget size.
    fn on_active_update(&mut self, _point: Point, _bounds: Size) {}

    /// Dwell completed; snapshot the current value.
    fn on_commit(&mut self, name: &str) -> WidgetInfo;
}

/// Built-in widget kinds
#[derive(Clone, Debug)]
pub enum WidgetBehavior {
    Button(Button),
    Slider(Slider),
    Dial(Dial),
}

impl WidgetBehavior {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Button(_) => WidgetKind::Button,
            Self::Slider(_) => WidgetKind::Slider,
            Self::Dial(_) => WidgetKind::Dial,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            Self::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    pub fn as_dial(&self) -> Option<&Dial> {
        match self {
            Self::Dial(dial) => Some(dial),
            _ => None,
        }
    }
}

impl DwellHooks for WidgetBehavior {
    fn on_inactive(&mut self) {
        match self {
            Self::Button(button) => button.on_inactive(),
            Self::Slider(slider) => slider.on_inactive(),
            Self::Dial(dial) => dial.on_inactive(),
        }
    }

    fn on_active_update(&mut self, point: Point, bounds: Size) {
        match self {
            Self::Button(button) => button.on_active_update(point, bounds),
            Self::Slider(slider) => slider.on_active_update(point, bounds),
            Self::Dial(dial) => dial.on_active_update(point, bounds),
        }
    }

    fn on_commit(&mut self, name: &str) -> WidgetInfo {
        match self {
            Self::Button(button) => button.on_commit(name),
            Self::Slider(slider) => slider.on_commit(name),
            Self::Dial(dial) => dial.on_commit(name),
        }
    }
}

impl From<Button> for WidgetBehavior {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<Slider> for WidgetBehavior {
    fn from(slider: Slider) -> Self {
        Self::Slider(slider)
    }
}

impl From<Dial> for WidgetBehavior {
    fn from(dial: Dial) -> Self {
        Self::Dial(dial)
    }
}
