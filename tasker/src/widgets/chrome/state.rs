use iced::{Point, mouse};

use super::drag::DragState;
use super::model::MaximizeAffordance;

/// Chrome state mirrored from the host window plus the active drag.
#[derive(Debug)]
pub(super) struct ChromeState {
    drag: DragState,
    cursor: Point,
    window_position: Point,
    affordance: MaximizeAffordance,
}

impl ChromeState {
    pub(super) fn new(window_position: Point) -> Self {
        Self {
            drag: DragState::default(),
            cursor: Point::ORIGIN,
            window_position,
            affordance: MaximizeAffordance::default(),
        }
    }

    pub(super) fn affordance(&self) -> MaximizeAffordance {
        self.affordance
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub(super) fn window_position(&self) -> Point {
        self.window_position
    }

    /// Start a drag at the current cursor when `button` is primary.
    pub(super) fn press_logo(&mut self, button: mouse::Button) -> bool {
        self.drag.press(button, self.cursor, self.window_position)
    }

    /// Record a window-relative cursor position and return the window
    /// position to request when a drag is in progress.
    pub(super) fn move_cursor(&mut self, position: Point) -> Option<Point> {
        self.cursor = position;
        self.drag.moved(position)
    }

    pub(super) fn release_pointer(&mut self) {
        self.drag.release();
    }

    /// Record the host-reported position. An active grab keeps its own
    /// requested position.
    pub(super) fn set_window_position(&mut self, position: Point) {
        self.window_position = position;
    }

    /// Apply a maximize toggle for the host-reported state and return
    /// whether the window should end up maximized.
    pub(super) fn apply_maximize_toggle(&mut self, is_maximized: bool) -> bool {
        self.affordance = MaximizeAffordance::after_toggle(is_maximized);
        !is_maximized
    }
}
