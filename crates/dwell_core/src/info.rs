//! Commit payloads emitted when a widget is pressed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of widget kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    Button,
    Slider,
    Dial,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Slider => "Slider",
            Self::Dial => "Dial",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific commit data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WidgetPayload {
    Button,
    /// Tab position as a percentage of the track, 0 at the left/top.
    Slider { range: u8 },
    /// Knob line angle from +x in degrees, counter-clockwise positive,
    /// within (-180, 180].
    Dial { angle: i32 },
}

impl WidgetPayload {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Button => WidgetKind::Button,
            Self::Slider { .. } => WidgetKind::Slider,
            Self::Dial { .. } => WidgetKind::Dial,
        }
    }
}

/// A snapshot of a widget's value at the moment it was pressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInfo {
    pub name: String,
    #[serde(flatten)]
    pub payload: WidgetPayload,
}

impl WidgetInfo {
    pub fn button(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: WidgetPayload::Button,
        }
    }

    pub fn slider(name: impl Into<String>, range: u8) -> Self {
        Self {
            name: name.into(),
            payload: WidgetPayload::Slider { range },
        }
    }

    pub fn dial(name: impl Into<String>, angle: i32) -> Self {
        Self {
            name: name.into(),
            payload: WidgetPayload::Dial { angle },
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.payload.kind()
    }

    /// Slider range, if this came from a slider.
    pub fn range(&self) -> Option<u8> {
        match self.payload {
            WidgetPayload::Slider { range } => Some(range),
            _ => None,
        }
    }

    /// Dial angle, if this came from a dial.
    pub fn angle(&self) -> Option<i32> {
        match self.payload {
            WidgetPayload::Dial { angle } => Some(angle),
            _ => None,
        }
    }
}

impl fmt::Display for WidgetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.name, self.kind())?;
        match self.payload {
            WidgetPayload::Button => Ok(()),
            WidgetPayload::Slider { range } => write!(f, "; range: {}", range),
            WidgetPayload::Dial { angle } => write!(f, "; angle: {}", angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_payload() {
        assert_eq!(WidgetInfo::button("Press me").to_string(), "\"Press me\" Button");
        assert_eq!(
            WidgetInfo::slider("Slide me", 42).to_string(),
            "\"Slide me\" Slider; range: 42"
        );
        assert_eq!(
            WidgetInfo::dial("Turn me", -90).to_string(),
            "\"Turn me\" Dial; angle: -90"
        );
    }

    #[test]
    fn test_json_is_flat() {
        let json = serde_json::to_value(WidgetInfo::slider("Slide me", 100)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Slide me", "kind": "Slider", "range": 100 })
        );

        let back: WidgetInfo =
            serde_json::from_str(r#"{"name":"Turn me","kind":"Dial","angle":45}"#).unwrap();
        assert_eq!(back, WidgetInfo::dial("Turn me", 45));
    }

    #[test]
    fn test_payload_accessors_match_kind() {
        let info = WidgetInfo::button("b");
        assert_eq!(info.kind(), WidgetKind::Button);
        assert_eq!(info.range(), None);
        assert_eq!(info.angle(), None);
        assert_eq!(WidgetInfo::dial("d", 10).angle(), Some(10));
    }
}
