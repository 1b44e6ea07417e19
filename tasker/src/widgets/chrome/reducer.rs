use iced::Task;

use super::command::ChromeCommand;
use super::event::ChromeEffect;
use super::state::ChromeState;

/// Reduce a chrome command into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut ChromeState,
    command: ChromeCommand,
) -> Task<ChromeEffect> {
    match command {
        ChromeCommand::TrackCursor { position } => {
            match state.move_cursor(position) {
                Some(position) => {
                    Task::done(ChromeEffect::MoveWindow { position })
                },
                None => Task::none(),
            }
        },
        ChromeCommand::PressLogo { button } => {
            if state.press_logo(button) {
                log::trace!(
                    "window drag started at {:?}",
                    state.window_position()
                );
            }
            Task::none()
        },
        ChromeCommand::ReleasePointer => {
            state.release_pointer();
            Task::none()
        },
        ChromeCommand::SyncWindowPosition { position } => {
            state.set_window_position(position);
            Task::none()
        },
        ChromeCommand::MinimizeWindow => {
            Task::done(ChromeEffect::MinimizeWindow)
        },
        ChromeCommand::RequestMaximizeToggle => {
            Task::done(ChromeEffect::QueryMaximized)
        },
        ChromeCommand::ApplyMaximizeToggle { is_maximized } => {
            let maximized = state.apply_maximize_toggle(is_maximized);
            Task::done(ChromeEffect::SetMaximized { maximized })
        },
        ChromeCommand::CloseWindow => Task::done(ChromeEffect::CloseWindow),
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, mouse};

    use super::*;
    use crate::widgets::chrome::model::MaximizeAffordance;

    fn press(state: &mut ChromeState, button: mouse::Button) {
        let _ = reduce(state, ChromeCommand::PressLogo { button });
    }

    fn sync(state: &mut ChromeState, x: f32, y: f32) {
        let _ = reduce(
            state,
            ChromeCommand::SyncWindowPosition {
                position: Point::new(x, y),
            },
        );
    }

    fn cursor(state: &mut ChromeState, x: f32, y: f32) {
        let _ = reduce(
            state,
            ChromeCommand::TrackCursor {
                position: Point::new(x, y),
            },
        );
    }

    #[test]
    fn given_drag_when_host_reports_each_move_then_deltas_compose_exactly() {
        let mut state = ChromeState::new(Point::new(100.0, 100.0));
        cursor(&mut state, 10.0, 10.0);
        press(&mut state, mouse::Button::Left);

        // Pointer moves to screen (115, 112) while the window is at (100, 100).
        assert_eq!(
            state.move_cursor(Point::new(15.0, 12.0)),
            Some(Point::new(105.0, 102.0))
        );
        sync(&mut state, 105.0, 102.0);

        // Pointer moves to screen (120, 120); the window follows by (5, 8).
        assert_eq!(
            state.move_cursor(Point::new(15.0, 18.0)),
            Some(Point::new(110.0, 110.0))
        );
    }

    #[test]
    fn given_moved_window_when_cursor_reported_before_sync_then_window_stays()
    {
        let mut state = ChromeState::new(Point::new(100.0, 100.0));
        cursor(&mut state, 10.0, 10.0);
        press(&mut state, mouse::Button::Left);

        assert_eq!(
            state.move_cursor(Point::new(15.0, 10.0)),
            Some(Point::new(105.0, 100.0))
        );

        // The host moved the window, so the stationary pointer is reported
        // at the grab point again before the Moved report arrives.
        assert_eq!(state.move_cursor(Point::new(10.0, 10.0)), None);

        sync(&mut state, 105.0, 100.0);
        assert_eq!(
            state.move_cursor(Point::new(12.0, 10.0)),
            Some(Point::new(107.0, 100.0))
        );
    }

    #[test]
    fn given_stale_position_report_when_dragging_then_requests_are_not_rewound()
    {
        let mut state = ChromeState::new(Point::new(0.0, 0.0));
        cursor(&mut state, 20.0, 20.0);
        press(&mut state, mouse::Button::Left);

        assert_eq!(
            state.move_cursor(Point::new(25.0, 20.0)),
            Some(Point::new(5.0, 0.0))
        );
        sync(&mut state, 0.0, 0.0);
        assert_eq!(
            state.move_cursor(Point::new(25.0, 20.0)),
            Some(Point::new(10.0, 0.0))
        );
    }

    #[test]
    fn given_release_when_cursor_moves_then_no_window_move() {
        let mut state = ChromeState::new(Point::new(100.0, 100.0));
        cursor(&mut state, 10.0, 10.0);
        press(&mut state, mouse::Button::Left);
        let _ = reduce(&mut state, ChromeCommand::ReleasePointer);

        assert!(!state.is_dragging());
        assert_eq!(state.move_cursor(Point::new(40.0, 40.0)), None);
    }

    #[test]
    fn given_right_press_when_cursor_moves_then_no_window_move() {
        let mut state = ChromeState::new(Point::new(100.0, 100.0));
        cursor(&mut state, 10.0, 10.0);
        press(&mut state, mouse::Button::Right);
        press(&mut state, mouse::Button::Middle);

        assert!(!state.is_dragging());
        assert_eq!(state.move_cursor(Point::new(40.0, 40.0)), None);
    }

    #[test]
    fn given_host_state_when_toggling_maximize_then_result_follows_host_every_time()
     {
        let mut state = ChromeState::new(Point::ORIGIN);

        for _ in 0..3 {
            assert!(!state.apply_maximize_toggle(true));
            assert_eq!(state.affordance(), MaximizeAffordance::Maximize);
        }

        for _ in 0..3 {
            assert!(state.apply_maximize_toggle(false));
            assert_eq!(state.affordance(), MaximizeAffordance::Restore);
        }

        assert!(!state.apply_maximize_toggle(true));
        assert_eq!(state.affordance(), MaximizeAffordance::Maximize);
    }

    #[test]
    fn given_window_commands_when_reduced_then_drag_state_is_preserved() {
        let mut state = ChromeState::new(Point::ORIGIN);
        press(&mut state, mouse::Button::Left);

        let _ = reduce(&mut state, ChromeCommand::MinimizeWindow);
        let _ = reduce(&mut state, ChromeCommand::RequestMaximizeToggle);
        let _ = reduce(&mut state, ChromeCommand::CloseWindow);

        assert!(state.is_dragging());
        assert_eq!(state.affordance(), MaximizeAffordance::Maximize);
    }
}
