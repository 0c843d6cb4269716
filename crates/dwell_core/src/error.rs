//! Dwell engine error types

use thiserror::Error;

/// Boxed error returned by a host's announce sink.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the dispatcher and widget constructors
#[derive(Error, Debug)]
pub enum DwellError {
    /// `route` was called before the widgets were laid out
    #[error("Dispatcher not laid out: call layout() before routing pointer samples")]
    NotLaidOut,

    /// A widget would occupy no screen area
    #[error("Widget \"{name}\" has a degenerate rectangle ({width} x {height})")]
    DegenerateRect {
        name: String,
        width: f32,
        height: f32,
    },

    /// Placement count does not match the widget count
    #[error("Layout mismatch: {widgets} widgets but {placements} placements")]
    LayoutMismatch { widgets: usize, placements: usize },

    /// Slider track limits are empty or inverted
    #[error("Slider \"{name}\" has an invalid track: min {min_pos} >= max {max_pos}")]
    InvalidTrack {
        name: String,
        min_pos: f32,
        max_pos: f32,
    },

    /// Slider tab size is negative or not finite
    #[error("Slider \"{name}\" has an invalid tab size ({width} x {height})")]
    InvalidTab {
        name: String,
        width: f32,
        height: f32,
    },

    /// A widget was placed at a non-finite origin
    #[error("Widget \"{name}\" placed at invalid origin ({x}, {y})")]
    InvalidOrigin { name: String, x: f32, y: f32 },

    /// The host's announce sink failed while handling a commit
    #[error("Announcing commit from \"{widget}\" failed: {source}")]
    Announce {
        widget: String,
        #[source]
        source: BoxError,
    },
}

impl DwellError {
    /// Whether this error points at host wiring rather than a runtime failure.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DwellError::Announce { .. })
    }
}

/// Result type for dwell operations
pub type Result<T> = std::result::Result<T, DwellError>;
