//! Pointer routing from the tracker to dwell widgets
//!
//! Bridges the tracker's single pointer stream to the widget panel: each
//! tick the pointer is hit-tested against the laid-out widget rectangles,
//! the widget under it advances with a widget-local point, and every other
//! widget advances with no point.
//!
//! # Architecture
//!
//! ```text
//! Tracker sample (screen point, or none)
//!     ↓
//! Dispatcher (hit testing, first match wins)
//!     ↓
//! Widget::advance (dwell state machine + kind hooks)
//!     ↓
//! Announce sink (one WidgetInfo per completed dwell)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use dwell_core::prelude::*;
//!
//! let pressed = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&pressed);
//!
//! let mut dispatcher = Dispatcher::with_announce(move |info: &WidgetInfo| {
//!     sink.borrow_mut().push(info.clone());
//!     Ok(())
//! });
//! dispatcher.add(Widget::button("Press me", Size::new(100.0, 100.0)));
//! dispatcher.layout(&[Point::new(0.0, 0.0)])?;
//!
//! for (t, x, y) in [(0, 50.0, 50.0), (500, 52.0, 51.0), (2100, 51.0, 52.0)] {
//!     dispatcher.route(Some(Point::new(x, y)), Timestamp::from_millis(t))?;
//! }
//! assert_eq!(pressed.borrow().len(), 1);
//! # Ok::<(), dwell_core::DwellError>(())
//! ```

use tracing::{debug, info, warn};

use crate::config::DwellConfig;
use crate::dwell::GestureState;
use crate::edge::EdgeLayout;
use crate::error::{BoxError, DwellError, Result};
use crate::geometry::{Point, Rect, Size, Timestamp};
use crate::info::WidgetInfo;
use crate::widget::Widget;

/// Callback receiving every committed press
pub type AnnounceCallback = Box<dyn FnMut(&WidgetInfo) -> std::result::Result<(), BoxError>>;

/// Result of a hit test
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTestResult {
    /// Index of the widget that was hit (first in list order)
    pub index: usize,
    /// Position relative to the widget's rectangle
    pub local: Point,
}

/// What a single `route` call did
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteOutcome {
    /// Widget that received the pointer this tick
    pub hit: Option<usize>,
    /// Press committed this tick, if any
    pub committed: Option<WidgetInfo>,
}

/// Routes one pointer stream to a fixed panel of widgets
///
/// Maintains:
/// - The widgets, in hit-test priority order
/// - Their absolute screen rectangles (after `layout`)
/// - The announce sink for committed presses
pub struct Dispatcher {
    widgets: Vec<Widget>,
    /// `None` until laid out, and again after the widget set changes.
    rects: Option<Vec<Rect>>,
    announce: Option<AnnounceCallback>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("widgets", &self.widgets)
            .field("rects", &self.rects)
            .field("has_announce", &self.announce.is_some())
            .finish()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher without an announce sink.
    ///
    /// Commits are still reported through [`RouteOutcome::committed`].
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
            rects: None,
            announce: None,
        }
    }

    /// Create a dispatcher that reports every committed press to `announce`.
    pub fn with_announce<F>(announce: F) -> Self
    where
        F: FnMut(&WidgetInfo) -> std::result::Result<(), BoxError> + 'static,
    {
        let mut dispatcher = Self::new();
        dispatcher.set_announce(announce);
        dispatcher
    }

    /// Replace the announce sink.
    ///
    /// The sink runs on the routing thread and must not block; hosts that
    /// need to hand commits to another thread should push into a channel.
    pub fn set_announce<F>(&mut self, announce: F)
    where
        F: FnMut(&WidgetInfo) -> std::result::Result<(), BoxError> + 'static,
    {
        self.announce = Some(Box::new(announce));
    }

    /// Append a widget. Returns its index.
    ///
    /// Adding a widget discards the current layout.
    pub fn add(&mut self, widget: Widget) -> usize {
        info!("Adding gesture widget: \"{}\" {}", widget.name(), widget.kind());
        self.widgets.push(widget);
        self.rects = None;
        self.widgets.len() - 1
    }

    /// Apply the same dwell timing to every widget.
    pub fn set_dwell_config(&mut self, config: DwellConfig) {
        for widget in &mut self.widgets {
            widget.set_dwell_config(config);
        }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widget(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Absolute screen rectangles, parallel to [`widgets`](Self::widgets).
    pub fn rects(&self) -> Option<&[Rect]> {
        self.rects.as_deref()
    }

    pub fn is_laid_out(&self) -> bool {
        self.rects.is_some()
    }

    /// Index of the widget that currently owns the pointer, if any.
    pub fn active(&self) -> Option<usize> {
        self.widgets
            .iter()
            .position(|w| w.state() != GestureState::Inactive)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Record where the host placed each widget on screen.
    ///
    /// `origins[i]` is the top-left corner of widget `i`; its size comes from
    /// the widget. Call again after the host re-positions the panel.
    pub fn layout(&mut self, origins: &[Point]) -> Result<()> {
        if origins.len() != self.widgets.len() {
            return Err(DwellError::LayoutMismatch {
                widgets: self.widgets.len(),
                placements: origins.len(),
            });
        }

        let mut rects = Vec::with_capacity(origins.len());
        for (widget, origin) in self.widgets.iter().zip(origins) {
            if !origin.is_finite() {
                return Err(DwellError::InvalidOrigin {
                    name: widget.name().to_string(),
                    x: origin.x,
                    y: origin.y,
                });
            }
            let size = widget.size();
            if !size.has_area() {
                return Err(DwellError::DegenerateRect {
                    name: widget.name().to_string(),
                    width: size.width,
                    height: size.height,
                });
            }
            rects.push(Rect::from_origin_size(*origin, size));
        }

        for (i, a) in rects.iter().enumerate() {
            for (j, b) in rects.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    warn!(
                        "widgets \"{}\" and \"{}\" overlap; the first one wins",
                        self.widgets[i].name(),
                        self.widgets[j].name()
                    );
                }
            }
        }

        debug!("laid out {} widgets: {:?}", rects.len(), rects);
        self.rects = Some(rects);
        Ok(())
    }

    /// Place the widgets along one screen edge and lay them out.
    pub fn layout_along_edge(&mut self, screen: Size, layout: &EdgeLayout) -> Result<()> {
        let sizes: Vec<Size> = self.widgets.iter().map(Widget::size).collect();
        let origins = layout.place(screen, &sizes);
        self.layout(&origins)
    }

    // =========================================================================
    // Routing
    // =========================================================================

    /// Route one tracker sample.
    ///
    /// `None` means the tracker reports no pointer: every widget goes
    /// inactive. Non-finite samples are treated the same way.
    ///
    /// Every widget has advanced before the announce sink runs, so a sink
    /// error leaves the panel fully updated and the press is not repeated.
    pub fn route(&mut self, point: Option<Point>, now: Timestamp) -> Result<RouteOutcome> {
        let rects = self.rects.as_deref().ok_or(DwellError::NotLaidOut)?;

        let point = match point {
            Some(p) if !p.is_finite() => {
                warn!("ignoring malformed pointer sample {:?}", p);
                None
            }
            other => other,
        };
        let hit = point.and_then(|p| hit_test_rects(rects, p));

        let mut committed = None;
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            let local = hit.filter(|h| h.index == index).map(|h| h.local);
            if let Some(info) = widget.advance(local, now) {
                committed = Some(info);
            }
        }

        if let Some(info) = &committed {
            self.emit(info)?;
        }

        Ok(RouteOutcome {
            hit: hit.map(|h| h.index),
            committed,
        })
    }

    /// Make every widget inactive (tracker lost the pointer entirely).
    pub fn reset_all(&mut self, now: Timestamp) -> Result<()> {
        self.route(None, now).map(|_| ())
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Find the first widget whose rectangle contains `point`.
    ///
    /// Returns `None` before layout.
    pub fn hit_test(&self, point: Point) -> Option<HitTestResult> {
        hit_test_rects(self.rects.as_deref()?, point)
    }

    /// Deliver a commit to the announce sink
    fn emit(&mut self, info: &WidgetInfo) -> Result<()> {
        if let Some(ref mut callback) = self.announce {
            callback(info).map_err(|source| DwellError::Announce {
                widget: info.name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

fn hit_test_rects(rects: &[Rect], point: Point) -> Option<HitTestResult> {
    rects
        .iter()
        .position(|rect| rect.contains(point))
        .map(|index| HitTestResult {
            index,
            local: rects[index].to_local(point),
        })
}
