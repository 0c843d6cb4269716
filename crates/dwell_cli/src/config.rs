//! Panel configuration file handling
//!
//! A panel file (`panel.toml`) describes one gesture panel:
//! - `[screen]` - size of the surface the tracker reports into
//! - `[layout]` - which edge the widget strip is attached to
//! - `[dwell]` - dwell timing shared by every widget
//! - `[[widget]]` - the widgets, in hit-test priority order

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use dwell_core::{Dispatcher, DwellConfig, EdgeLayout, Size, SliderConfig, Widget, WidgetKind};

/// A complete panel description
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub layout: EdgeLayout,
    #[serde(default)]
    pub dwell: DwellConfig,
    #[serde(default, rename = "widget")]
    pub widgets: Vec<WidgetConfig>,
}

/// Tracker surface size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScreenConfig {
    #[serde(default = "default_screen_width")]
    pub width: f32,
    #[serde(default = "default_screen_height")]
    pub height: f32,
}

fn default_screen_width() -> f32 {
    1280.0
}

fn default_screen_height() -> f32 {
    720.0
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_screen_width(),
            height: default_screen_height(),
        }
    }
}

/// One widget entry
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WidgetConfig {
    pub name: String,
    pub kind: WidgetKind,
    pub width: f32,
    pub height: f32,
    /// Track geometry for sliders. Defaults to the horizontal track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider: Option<SliderConfig>,
    /// Per-widget dwell timing, overriding `[dwell]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dwell: Option<DwellConfig>,
}

impl WidgetConfig {
    fn new(name: &str, kind: WidgetKind, width: f32, height: f32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            width,
            height,
            slider: None,
            dwell: None,
        }
    }

    fn build(&self, shared: DwellConfig) -> Result<Widget> {
        let size = Size::new(self.width, self.height);
        let widget = match self.kind {
            WidgetKind::Button => Widget::button(&self.name, size),
            WidgetKind::Slider => {
                let track = self.slider.unwrap_or_default();
                Widget::slider(&self.name, size, track)
                    .with_context(|| format!("Invalid slider \"{}\"", self.name))?
            }
            WidgetKind::Dial => Widget::dial(&self.name, size),
        };
        Ok(widget.with_dwell_config(self.dwell.unwrap_or(shared)))
    }
}

impl Default for PanelConfig {
    /// The demo panel: a button, a horizontal slider and a dial along the
    /// top of the screen.
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            layout: EdgeLayout::default(),
            dwell: DwellConfig::default(),
            widgets: vec![
                WidgetConfig::new("Press me", WidgetKind::Button, 100.0, 100.0),
                WidgetConfig {
                    slider: Some(SliderConfig::horizontal()),
                    ..WidgetConfig::new("Slide me", WidgetKind::Slider, 495.0, 120.0)
                },
                WidgetConfig::new("Turn me", WidgetKind::Dial, 120.0, 120.0),
            ],
        }
    }
}

impl PanelConfig {
    /// Load a panel file, or the demo panel when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load a panel file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "No panel file at {}. Run `dwell panel > panel.toml` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize panel config")
    }

    pub fn screen_size(&self) -> Size {
        Size::new(self.screen.width, self.screen.height)
    }

    /// Create the widgets and lay them out along the configured edge.
    pub fn build(&self) -> Result<Dispatcher> {
        let mut dispatcher = Dispatcher::new();
        for widget in &self.widgets {
            dispatcher.add(widget.build(self.dwell)?);
        }
        dispatcher
            .layout_along_edge(self.screen_size(), &self.layout)
            .context("Failed to lay out panel")?;
        Ok(dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwell_core::{Edge, Orientation};

    #[test]
    fn test_default_panel_round_trips() {
        let panel = PanelConfig::default();
        let text = panel.to_toml().unwrap();
        assert_eq!(PanelConfig::from_toml(&text).unwrap(), panel);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let panel = PanelConfig::from_toml(
            r#"
            [[widget]]
            name = "Go"
            kind = "Button"
            width = 80
            height = 80
            "#,
        )
        .unwrap();

        assert_eq!(panel.screen, ScreenConfig::default());
        assert_eq!(panel.layout.edge, Edge::North);
        assert_eq!(panel.dwell, DwellConfig::default());
        assert_eq!(panel.widgets.len(), 1);
    }

    #[test]
    fn test_full_file() {
        let panel = PanelConfig::from_toml(
            r#"
            [screen]
            width = 800
            height = 600

            [layout]
            edge = "west"
            gap = 10

            [dwell]
            still_time_ms = 1500

            [[widget]]
            name = "Volume"
            kind = "Slider"
            width = 120
            height = 500

            [widget.slider]
            orientation = "vertical"
            min_pos = 55
            max_pos = 447
            tab = { width = 24, height = 20 }

            [[widget]]
            name = "Quick"
            kind = "Button"
            width = 100
            height = 100
            dwell = { still_time_ms = 500 }
            "#,
        )
        .unwrap();

        assert_eq!(panel.layout.edge, Edge::West);
        assert_eq!(panel.dwell.still_time_ms, 1500);
        let slider = panel.widgets[0].slider.unwrap();
        assert_eq!(slider.orientation, Orientation::Vertical);

        let dispatcher = panel.build().unwrap();
        assert_eq!(dispatcher.widget(0).unwrap().dwell_config().still_time_ms, 1500);
        assert_eq!(dispatcher.widget(1).unwrap().dwell_config().still_time_ms, 500);
        assert!(dispatcher.rects().unwrap().iter().all(|r| r.x == 0.0));
    }

    #[test]
    fn test_build_default_panel() {
        let dispatcher = PanelConfig::default().build().unwrap();
        let kinds: Vec<_> = dispatcher.widgets().iter().map(Widget::kind).collect();
        assert_eq!(
            kinds,
            vec![WidgetKind::Button, WidgetKind::Slider, WidgetKind::Dial]
        );
        assert!(dispatcher.is_laid_out());
    }

    #[test]
    fn test_bad_slider_track_is_reported() {
        let mut panel = PanelConfig::default();
        panel.widgets[1].slider = Some(SliderConfig::horizontal().with_track(400.0, 100.0));
        let err = panel.build().unwrap_err();
        assert!(err.to_string().contains("Slide me"));
    }

    #[test]
    fn test_nan_tab_is_a_config_error() {
        let panel = PanelConfig::from_toml(
            r#"
            [[widget]]
            name = "Slide me"
            kind = "Slider"
            width = 495
            height = 120

            [widget.slider]
            orientation = "horizontal"
            min_pos = 55
            max_pos = 440
            tab = { width = nan, height = 24 }
            "#,
        )
        .unwrap();

        let err = panel.build().unwrap_err();
        assert!(err.to_string().contains("Slide me"));
        assert!(matches!(
            err.downcast_ref::<dwell_core::DwellError>(),
            Some(dwell_core::DwellError::InvalidTab { .. })
        ));
    }

    #[test]
    fn test_degenerate_widget_is_rejected() {
        let mut panel = PanelConfig::default();
        panel.widgets[0].height = 0.0;
        assert!(panel.build().is_err());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = PanelConfig::from_toml(
            r#"
            [[widget]]
            name = "x"
            kind = "Knob"
            width = 10
            height = 10
            "#,
        );
        assert!(result.is_err());
    }
}
