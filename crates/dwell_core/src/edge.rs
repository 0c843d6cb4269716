//! Placement of the widget strip along one screen edge.
//!
//! Gesture panels sit over a full-screen camera view, so widgets are lined
//! up along a single edge to keep the middle of the screen clear:
//!
//! - `North`/`South`: one row, centered horizontally, `gap` from the edge
//! - `West`/`East`: one column, centered vertically, flush with the edge
//!
//! Rows and columns never wrap. A strip that does not fit is still placed
//! and runs off both ends.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::{Point, Size};

/// Screen edge the widget strip is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    North,
    South,
    East,
    West,
}

/// Edge placement settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeLayout {
    pub edge: Edge,
    /// Spacing between widgets, and between a row and its edge.
    pub gap: f32,
}

impl Default for EdgeLayout {
    fn default() -> Self {
        Self {
            edge: Edge::North,
            gap: 5.0,
        }
    }
}

impl EdgeLayout {
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            ..Default::default()
        }
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Compute the top-left corner of each widget, in order.
    pub fn place(&self, screen: Size, sizes: &[Size]) -> Vec<Point> {
        if sizes.is_empty() {
            return Vec::new();
        }
        match self.edge {
            Edge::North | Edge::South => self.place_row(screen, sizes),
            Edge::East | Edge::West => self.place_column(screen, sizes),
        }
    }

    fn place_row(&self, screen: Size, sizes: &[Size]) -> Vec<Point> {
        let gaps = self.gap * (sizes.len() - 1) as f32;
        let row_width: f32 = sizes.iter().map(|s| s.width).sum::<f32>() + gaps;
        if row_width > screen.width - 2.0 * self.gap {
            warn!(
                "{:?} row is {:.0}px wide but the screen is {:.0}px",
                self.edge, row_width, screen.width
            );
        }

        let mut x = (screen.width - row_width) / 2.0;
        sizes
            .iter()
            .map(|size| {
                let y = match self.edge {
                    Edge::North => self.gap,
                    _ => screen.height - self.gap - size.height,
                };
                let origin = Point::new(x, y);
                x += size.width + self.gap;
                origin
            })
            .collect()
    }

    fn place_column(&self, screen: Size, sizes: &[Size]) -> Vec<Point> {
        let gaps = self.gap * (sizes.len() - 1) as f32;
        let column_height: f32 = sizes.iter().map(|s| s.height).sum::<f32>() + gaps;
        if column_height > screen.height {
            warn!(
                "{:?} column is {:.0}px tall but the screen is {:.0}px",
                self.edge, column_height, screen.height
            );
        }

        let mut y = (screen.height - column_height) / 2.0;
        sizes
            .iter()
            .map(|size| {
                let x = match self.edge {
                    Edge::West => 0.0,
                    _ => screen.width - size.width,
                };
                let origin = Point::new(x, y);
                y += size.height + self.gap;
                origin
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1000.0, 800.0);

    fn sizes() -> Vec<Size> {
        vec![Size::new(100.0, 100.0), Size::new(200.0, 50.0)]
    }

    #[test]
    fn test_north_row_is_centered_at_top() {
        let origins = EdgeLayout::new(Edge::North).place(SCREEN, &sizes());
        // Row is 100 + 5 + 200 = 305 wide
        assert_eq!(origins, vec![Point::new(347.5, 5.0), Point::new(452.5, 5.0)]);
    }

    #[test]
    fn test_south_row_is_bottom_aligned() {
        let origins = EdgeLayout::new(Edge::South).place(SCREEN, &sizes());
        assert_eq!(origins[0], Point::new(347.5, 695.0));
        assert_eq!(origins[1], Point::new(452.5, 745.0));
    }

    #[test]
    fn test_west_column_is_flush_left() {
        let origins = EdgeLayout::new(Edge::West).place(SCREEN, &sizes());
        // Column is 100 + 5 + 50 = 155 tall
        assert_eq!(origins, vec![Point::new(0.0, 322.5), Point::new(0.0, 427.5)]);
    }

    #[test]
    fn test_east_column_is_flush_right() {
        let origins = EdgeLayout::new(Edge::East).place(SCREEN, &sizes());
        assert_eq!(origins, vec![Point::new(900.0, 322.5), Point::new(800.0, 427.5)]);
    }

    #[test]
    fn test_placements_do_not_overlap() {
        use crate::geometry::Rect;

        for edge in [Edge::North, Edge::South, Edge::East, Edge::West] {
            let sizes = sizes();
            let origins = EdgeLayout::new(edge).place(SCREEN, &sizes);
            let a = Rect::from_origin_size(origins[0], sizes[0]);
            let b = Rect::from_origin_size(origins[1], sizes[1]);
            assert!(!a.overlaps(&b), "{:?} placements overlap", edge);
        }
    }

    #[test]
    fn test_empty() {
        assert!(EdgeLayout::default().place(SCREEN, &[]).is_empty());
    }
}
