//! Linear slider
//!
//! The tab follows the pointer along the primary axis, clamped so its center
//! never leaves the track `[min_pos, max_pos]`, and stays centered on the
//! cross axis. On commit the tab center is reported as a 0-100 percentage of
//! the track (0 at the left for horizontal sliders, at the top for vertical
//! ones).
//!
//! The tab position survives the pointer leaving: a slider remembers where
//! it was left.

use serde::{Deserialize, Serialize};

use super::DwellHooks;
use crate::error::{DwellError, Result};
use crate::geometry::{Point, Size};
use crate::info::WidgetInfo;

/// Slider travel direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Track geometry, in widget-local pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub orientation: Orientation,
    /// Track start along the primary axis.
    pub min_pos: f32,
    /// Track end along the primary axis.
    pub max_pos: f32,
    /// Tab image size.
    pub tab: Size,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl SliderConfig {
    /// Track limits of the stock horizontal slider art.
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            min_pos: 55.0,
            max_pos: 440.0,
            tab: Size::new(20.0, 24.0),
        }
    }

    /// Track limits of the stock vertical slider art.
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            min_pos: 55.0,
            max_pos: 447.0,
            tab: Size::new(24.0, 20.0),
        }
    }

    /// Set the track limits.
    pub fn with_track(mut self, min_pos: f32, max_pos: f32) -> Self {
        self.min_pos = min_pos;
        self.max_pos = max_pos;
        self
    }

    /// Set the tab size.
    pub fn with_tab(mut self, tab: Size) -> Self {
        self.tab = tab;
        self
    }

    /// Tab extent along the primary axis.
    pub fn tab_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Horizontal => self.tab.width,
            Orientation::Vertical => self.tab.height,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        let finite = self.min_pos.is_finite() && self.max_pos.is_finite();
        if !finite || self.max_pos <= self.min_pos {
            return Err(DwellError::InvalidTrack {
                name: name.to_string(),
                min_pos: self.min_pos,
                max_pos: self.max_pos,
            });
        }
        let tab_ok = |v: f32| v.is_finite() && v >= 0.0;
        if !tab_ok(self.tab.width) || !tab_ok(self.tab.height) {
            return Err(DwellError::InvalidTab {
                name: name.to_string(),
                width: self.tab.width,
                height: self.tab.height,
            });
        }
        Ok(())
    }
}

/// Slider behavior
#[derive(Clone, Debug)]
pub struct Slider {
    config: SliderConfig,
    /// Top-left of the tab in widget-local coordinates.
    tab: Point,
}

impl Slider {
    /// Create a slider whose tab starts at the beginning of the track.
    pub fn new(name: &str, config: SliderConfig, bounds: Size) -> Result<Self> {
        config.validate(name)?;
        let mut slider = Self {
            config,
            tab: Point::ZERO,
        };
        let start = slider.min_tab();
        slider.place_tab(start, bounds);
        Ok(slider)
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Top-left of the tab, for drawing.
    pub fn tab_origin(&self) -> Point {
        self.tab
    }

    /// Current value as a 0-100 percentage of the track.
    pub fn range(&self) -> u8 {
        let half = self.config.tab_extent() / 2.0;
        let span = f64::from(self.config.max_pos - self.config.min_pos);
        let offset = f64::from(self.primary() + half - self.config.min_pos);
        (100.0 * offset / span).round().clamp(0.0, 100.0) as u8
    }

    fn primary(&self) -> f32 {
        match self.config.orientation {
            Orientation::Horizontal => self.tab.x,
            Orientation::Vertical => self.tab.y,
        }
    }

    fn min_tab(&self) -> f32 {
        self.config.min_pos - self.config.tab_extent() / 2.0
    }

    fn max_tab(&self) -> f32 {
        self.config.max_pos - self.config.tab_extent() / 2.0
    }

    fn place_tab(&mut self, primary: f32, bounds: Size) {
        let primary = primary.clamp(self.min_tab(), self.max_tab());
        self.tab = match self.config.orientation {
            Orientation::Horizontal => {
                Point::new(primary, bounds.height / 2.0 - self.config.tab.height / 2.0)
            }
            Orientation::Vertical => {
                Point::new(bounds.width / 2.0 - self.config.tab.width / 2.0, primary)
            }
        };
    }
}

impl DwellHooks for Slider {
    fn on_active_update(&mut self, point: Point, bounds: Size) {
        let primary = match self.config.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        };
        self.place_tab(primary, bounds);
    }

    fn on_commit(&mut self, name: &str) -> WidgetInfo {
        WidgetInfo::slider(name, self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size::new(495.0, 120.0);

    fn horizontal() -> Slider {
        Slider::new("Slide me", SliderConfig::horizontal(), BOUNDS).unwrap()
    }

    #[test]
    fn test_starts_at_zero_centered() {
        let slider = horizontal();
        assert_eq!(slider.range(), 0);
        assert_eq!(slider.tab_origin(), Point::new(45.0, 48.0));
    }

    #[test]
    fn test_track_ends_map_to_0_and_100() {
        let mut slider = horizontal();
        slider.on_active_update(Point::new(45.0, 10.0), BOUNDS);
        assert_eq!(slider.on_commit("Slide me").range(), Some(0));

        slider.on_active_update(Point::new(430.0, 10.0), BOUNDS);
        assert_eq!(slider.on_commit("Slide me").range(), Some(100));
    }

    #[test]
    fn test_clamps_far_outside_track() {
        let mut slider = horizontal();
        for x in [-1000.0, -1.0, 0.0, 44.9, 430.1, 494.0, 1.0e6] {
            slider.on_active_update(Point::new(x, 60.0), BOUNDS);
            let range = slider.range();
            assert!(range <= 100, "x={} gave {}", x, range);
        }
        slider.on_active_update(Point::new(-1000.0, 0.0), BOUNDS);
        assert_eq!(slider.range(), 0);
        slider.on_active_update(Point::new(1.0e6, 0.0), BOUNDS);
        assert_eq!(slider.range(), 100);
    }

    #[test]
    fn test_midpoint() {
        let mut slider = horizontal();
        // Tab center at 247.5, exactly half way along 55..440
        slider.on_active_update(Point::new(237.5, 0.0), BOUNDS);
        assert_eq!(slider.range(), 50);
    }

    #[test]
    fn test_cross_axis_stays_centered() {
        let mut slider = horizontal();
        slider.on_active_update(Point::new(200.0, 3.0), BOUNDS);
        assert_eq!(slider.tab_origin().y, 48.0);
        slider.on_active_update(Point::new(200.0, 117.0), BOUNDS);
        assert_eq!(slider.tab_origin().y, 48.0);
    }

    #[test]
    fn test_vertical_uses_y() {
        let bounds = Size::new(120.0, 500.0);
        let mut slider = Slider::new("Lift", SliderConfig::vertical(), bounds).unwrap();
        slider.on_active_update(Point::new(0.0, 437.0), bounds);
        assert_eq!(slider.range(), 100);
        assert_eq!(slider.tab_origin().x, 48.0);
    }

    #[test]
    fn test_inactive_keeps_position() {
        let mut slider = horizontal();
        slider.on_active_update(Point::new(237.5, 0.0), BOUNDS);
        slider.on_inactive();
        assert_eq!(slider.range(), 50);
    }

    #[test]
    fn test_rejects_inverted_track() {
        let config = SliderConfig::horizontal().with_track(300.0, 100.0);
        let err = Slider::new("bad", config, BOUNDS).unwrap_err();
        assert!(matches!(err, DwellError::InvalidTrack { .. }));
    }

    #[test]
    fn test_rejects_bad_tab_size() {
        for tab in [
            Size::new(f32::NAN, 24.0),
            Size::new(20.0, f32::INFINITY),
            Size::new(-20.0, 24.0),
        ] {
            let config = SliderConfig::horizontal().with_tab(tab);
            let err = Slider::new("bad", config, BOUNDS).unwrap_err();
            assert!(matches!(err, DwellError::InvalidTab { .. }), "{:?}", tab);
            assert!(err.is_configuration());
        }
    }
}
