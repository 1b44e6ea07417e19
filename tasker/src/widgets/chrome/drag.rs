use iced::{Point, Vector, mouse};

/// Pointer grab held while the brand zone is being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Grab {
    /// Window-relative cursor position at press time.
    anchor: Point,
    /// Window position most recently requested from the host.
    window: Point,
}

/// Drag-to-move state for the title bar brand zone.
///
/// Cursor positions are window-relative. Once the host has applied a move,
/// the cursor is reported against the moved window, so the offset from the
/// anchor is exactly the pointer travel since the previous request.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(super) struct DragState {
    grab: Option<Grab>,
}

impl DragState {
    pub(super) fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Start a grab on primary press. Other buttons leave the state as is.
    pub(super) fn press(
        &mut self,
        button: mouse::Button,
        cursor: Point,
        window: Point,
    ) -> bool {
        if button != mouse::Button::Left {
            return false;
        }

        self.grab = Some(Grab {
            anchor: cursor,
            window,
        });
        true
    }

    /// Return the next window position for a cursor move during a grab.
    pub(super) fn moved(&mut self, cursor: Point) -> Option<Point> {
        let grab = self.grab.as_mut()?;
        let delta: Vector = cursor - grab.anchor;
        if delta == Vector::ZERO {
            return None;
        }

        grab.window = grab.window + delta;
        Some(grab.window)
    }

    pub(super) fn release(&mut self) {
        self.grab = None;
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, mouse};

    use super::DragState;

    fn window() -> Point {
        Point::new(100.0, 100.0)
    }

    #[test]
    fn given_primary_press_when_host_applies_each_move_then_deltas_compose() {
        let mut drag = DragState::default();
        assert!(drag.press(
            mouse::Button::Left,
            Point::new(10.0, 10.0),
            window()
        ));

        // Screen pointer (110, 110) -> (115, 112), window still at (100, 100).
        let first = drag.moved(Point::new(15.0, 12.0));
        assert_eq!(first, Some(Point::new(105.0, 102.0)));

        // Screen pointer -> (125, 100), reported against the window at
        // (105, 102).
        let second = drag.moved(Point::new(20.0, -2.0));
        assert_eq!(second, Some(Point::new(115.0, 90.0)));
    }

    #[test]
    fn given_moved_window_when_pointer_is_stationary_then_no_window_move() {
        let mut drag = DragState::default();
        drag.press(mouse::Button::Left, Point::new(10.0, 10.0), window());

        assert_eq!(
            drag.moved(Point::new(15.0, 10.0)),
            Some(Point::new(105.0, 100.0))
        );
        // The window followed the pointer, so the cursor is back at the
        // anchor relative to the moved window.
        assert_eq!(drag.moved(Point::new(10.0, 10.0)), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn given_released_grab_when_pointer_moves_then_no_window_move() {
        let mut drag = DragState::default();
        drag.press(mouse::Button::Left, Point::new(10.0, 10.0), window());
        drag.release();

        assert!(!drag.is_dragging());
        assert_eq!(drag.moved(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn given_non_primary_press_when_pointer_moves_then_no_grab_is_started() {
        let mut drag = DragState::default();

        for button in [
            mouse::Button::Right,
            mouse::Button::Middle,
            mouse::Button::Back,
        ] {
            assert!(!drag.press(button, Point::new(10.0, 10.0), window()));
        }

        assert_eq!(drag, DragState::default());
        assert_eq!(drag.moved(Point::new(40.0, 40.0)), None);
    }
}
