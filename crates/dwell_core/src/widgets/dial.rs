//! Rotary dial
//!
//! The knob line starts along +x. Each pointer move turns it by the signed
//! angle swept around the widget center between the previous and the new
//! pointer position, measured with +y pointing up the screen.
//!
//! A clockwise hand sweep is a negative change and is subtracted from the
//! knob angle; the committed angle is negated once more because the tracker
//! delivers a mirrored image. Both sign flips are part of the contract with
//! the tracker, keep them together.

use std::f64::consts::PI;

use super::DwellHooks;
use crate::geometry::{Point, Size};
use crate::info::WidgetInfo;

/// Dial behavior
#[derive(Clone, Debug, Default)]
pub struct Dial {
    /// Knob line angle in degrees, within (-180, 180].
    angle: i32,
    /// Pointer position the next change is measured from.
    previous: Option<Point>,
}

impl Dial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the knob at `angle` degrees instead of along +x.
    pub fn with_angle(angle: i32) -> Self {
        Self {
            angle: wrap_degrees(angle),
            previous: None,
        }
    }

    /// Knob angle as drawn, in degrees.
    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn previous(&self) -> Option<Point> {
        self.previous
    }
}

impl DwellHooks for Dial {
    fn on_inactive(&mut self) {
        self.previous = None;
    }

    fn on_active_update(&mut self, point: Point, bounds: Size) {
        let Some(previous) = self.previous.replace(point) else {
            return;
        };
        let center = bounds.center();
        let change = signed_angle_change(offset(previous, center), offset(point, center));
        self.angle = wrap_degrees(self.angle - change);
    }

    fn on_commit(&mut self, name: &str) -> WidgetInfo {
        WidgetInfo::dial(name, wrap_degrees(-self.angle))
    }
}

/// Offset from `center` with +y up.
fn offset(point: Point, center: Point) -> (f64, f64) {
    (
        f64::from(point.x - center.x),
        -f64::from(point.y - center.y),
    )
}

/// Smallest signed rotation from `from` to `to` in whole degrees.
///
/// Positive turns from +x towards +y. The radian difference is normalized
/// into (-pi, pi] and rounded half-up.
pub fn signed_angle_change(from: (f64, f64), to: (f64, f64)) -> i32 {
    let mut change = to.1.atan2(to.0) - from.1.atan2(from.0);
    if change > PI {
        change -= 2.0 * PI;
    } else if change <= -PI {
        change += 2.0 * PI;
    }
    (change.to_degrees() + 0.5).floor() as i32
}

/// Wrap degrees into (-180, 180].
pub fn wrap_degrees(angle: i32) -> i32 {
    let wrapped = angle.rem_euclid(360);
    if wrapped > 180 {
        wrapped - 360
    } else {
        wrapped
    }
}
