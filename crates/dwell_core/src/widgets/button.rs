//! Push button: no continuous state, commits its name.

use super::DwellHooks;
use crate::info::WidgetInfo;

/// Button behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Button;

impl DwellHooks for Button {
    fn on_commit(&mut self, name: &str) -> WidgetInfo {
        WidgetInfo::button(name)
    }
}
