//! Dwell Core
//!
//! Hands-free "dwell to press" widgets driven by a single tracked pointer.
//! A widget is pressed when the pointer rests on it, within a small radius,
//! for long enough. Sliders and dials are adjusted by moving the pointer
//! while over them and committed by holding still.
//!
//! # Example
//!
//! ```rust
//! use dwell_core::prelude::*;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.add(Widget::button("Press me", Size::new(100.0, 100.0)));
//! dispatcher.add(Widget::dial("Turn me", Size::new(100.0, 100.0)));
//! dispatcher.layout_along_edge(Size::new(1280.0, 720.0), &EdgeLayout::new(Edge::North))?;
//!
//! let center = dispatcher.rects().unwrap()[0].center();
//! dispatcher.route(Some(center), Timestamp::from_millis(0))?;
//! let outcome = dispatcher.route(Some(center), Timestamp::from_millis(2000))?;
//! assert_eq!(outcome.committed.unwrap().to_string(), "\"Press me\" Button");
//! # Ok::<(), DwellError>(())
//! ```

pub mod config;
pub mod dispatcher;
pub mod dwell;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod info;
pub mod widget;
pub mod widgets;


// Core types
pub use config::{DwellConfig, STILL_DIST2, STILL_TIME_MS};
pub use dispatcher::{AnnounceCallback, Dispatcher, HitTestResult, RouteOutcome};
pub use dwell::{DwellAction, DwellTracker, GestureState};
pub use error::{BoxError, DwellError, Result};
pub use geometry::{Point, Rect, Size, Timestamp};
pub use info::{WidgetInfo, WidgetKind, WidgetPayload};
pub use widget::Widget;

// Widget kinds
pub use widgets::{
    Button, Dial, DwellHooks, Orientation, Slider, SliderConfig, WidgetBehavior,
};

// Placement
pub use edge::{Edge, EdgeLayout};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::DwellConfig;
    pub use crate::dispatcher::{Dispatcher, RouteOutcome};
    pub use crate::dwell::GestureState;
    pub use crate::edge::{Edge, EdgeLayout};
    pub use crate::error::{DwellError, Result};
    pub use crate::geometry::{Point, Rect, Size, Timestamp};
    pub use crate::info::{WidgetInfo, WidgetKind};
    pub use crate::widget::Widget;
    pub use crate::widgets::{Orientation, SliderConfig};
}
