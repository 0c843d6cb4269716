//! A dwell-driven widget: name, size, dwell tracker and kind behavior.
//!
//! ```rust
//! use dwell_core::prelude::*;
//!
//! let mut button = Widget::button("Press me", Size::new(100.0, 100.0));
//! let at = |t| Timestamp::from_millis(t);
//!
//! assert!(button.advance(Some(Point::new(50.0, 50.0)), at(0)).is_none());
//! assert!(button.advance(Some(Point::new(52.0, 51.0)), at(500)).is_none());
//!
//! let info = button.advance(Some(Point::new(51.0, 52.0)), at(2100)).unwrap();
//! assert_eq!(info.to_string(), "\"Press me\" Button");
//! ```

use tracing::{debug, info, warn};

use crate::config::DwellConfig;
use crate::dwell::{DwellAction, DwellTracker, GestureState};
use crate::error::Result;
use crate::geometry::{Point, Size, Timestamp};
use crate::info::{WidgetInfo, WidgetKind};
use crate::widgets::{Button, Dial, DwellHooks, Slider, SliderConfig, WidgetBehavior};

/// One widget on the gesture panel
#[derive(Clone, Debug)]
pub struct Widget {
    name: String,
    /// Local bounds; the widget occupies `(0,0)..(width,height)`.
    size: Size,
    config: DwellConfig,
    tracker: DwellTracker,
    behavior: WidgetBehavior,
}

impl Widget {
    /// Create a widget with an explicit behavior.
    pub fn new(name: impl Into<String>, size: Size, behavior: impl Into<WidgetBehavior>) -> Self {
        Self {
            name: name.into(),
            size,
            config: DwellConfig::default(),
            tracker: DwellTracker::new(),
            behavior: behavior.into(),
        }
    }

    /// Create a push button.
    pub fn button(name: impl Into<String>, size: Size) -> Self {
        Self::new(name, size, Button)
    }

    /// Create a slider. Fails if the track is empty or inverted.
    pub fn slider(name: impl Into<String>, size: Size, config: SliderConfig) -> Result<Self> {
        let name = name.into();
        let slider = Slider::new(&name, config, size)?;
        Ok(Self::new(name, size, slider))
    }

    /// Create a dial with its knob along +x.
    pub fn dial(name: impl Into<String>, size: Size) -> Self {
        Self::new(name, size, Dial::new())
    }

    /// Use different dwell timing for this widget.
    pub fn with_dwell_config(mut self, config: DwellConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_dwell_config(&mut self, config: DwellConfig) {
        self.config = config;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> WidgetKind {
        self.behavior.kind()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn dwell_config(&self) -> &DwellConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.tracker.state()
    }

    /// Frozen local point stillness is measured against.
    pub fn last_point(&self) -> Option<Point> {
        self.tracker.last_point()
    }

    pub fn tracker(&self) -> &DwellTracker {
        &self.tracker
    }

    pub fn behavior(&self) -> &WidgetBehavior {
        &self.behavior
    }

    /// Advance one tick with a widget-local point, or `None` if the pointer
    /// is elsewhere. Returns the payload if this tick committed a press.
    ///
    /// The tracker's committed flag is already set when this returns, so a
    /// caller that fails to deliver the payload cannot trigger it twice.
    pub fn advance(&mut self, point: Option<Point>, now: Timestamp) -> Option<WidgetInfo> {
        let point = match point {
            Some(p) if !p.is_finite() => {
                warn!(widget = %self.name, "ignoring non-finite local point {:?}", p);
                None
            }
            other => other,
        };

        let was_inactive = self.state().is_inactive();
        match self.tracker.step(point, now, &self.config) {
            DwellAction::Release => {
                self.behavior.on_inactive();
                None
            }
            DwellAction::Update(p) => {
                if was_inactive {
                    debug!(widget = %self.name, "activated at ({:.0}, {:.0})", p.x, p.y);
                }
                self.behavior.on_active_update(p, self.size);
                None
            }
            DwellAction::Commit => {
                let payload = self.behavior.on_commit(&self.name);
                info!(widget = %self.name, "pressed: {}", payload);
                Some(payload)
            }
            DwellAction::Hold => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(t: u64) -> Timestamp {
        Timestamp::from_millis(t)
    }

    #[test]
    fn test_pressed_freezes_slider() {
        let size = Size::new(495.0, 120.0);
        let mut widget = Widget::slider("Slide me", size, SliderConfig::horizontal()).unwrap();

        widget.advance(Some(Point::new(237.5, 60.0)), ms(0));
        let info = widget.advance(Some(Point::new(237.5, 60.0)), ms(2000)).unwrap();
        assert_eq!(info.range(), Some(50));

        // Jitter inside the stillness radius does not move the tab
        widget.advance(Some(Point::new(250.0, 60.0)), ms(2100));
        assert_eq!(widget.state(), GestureState::Pressed);
        let slider = widget.behavior().as_slider().unwrap();
        assert_eq!(slider.range(), 50);
    }

    #[test]
    fn test_non_finite_point_releases() {
        let mut widget = Widget::button("b", Size::new(10.0, 10.0));
        widget.advance(Some(Point::new(5.0, 5.0)), ms(0));
        assert_eq!(widget.state(), GestureState::Active);

        assert!(widget.advance(Some(Point::new(f32::NAN, 5.0)), ms(10)).is_none());
        assert_eq!(widget.state(), GestureState::Inactive);
    }

    #[test]
    fn test_per_widget_config() {
        let mut widget =
            Widget::button("quick", Size::new(10.0, 10.0)).with_dwell_config(DwellConfig::testing());
        widget.advance(Some(Point::new(5.0, 5.0)), ms(0));
        assert!(widget.advance(Some(Point::new(5.0, 5.0)), ms(100)).is_some());
    }
}
