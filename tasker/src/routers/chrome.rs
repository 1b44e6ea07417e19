use iced::{Task, mouse, window};

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{ChromeCommand, ChromeEffect, ChromeEvent};

/// Route a chrome UI event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    let command = map_chrome_event_to_command(event);
    app.widgets
        .chrome
        .reduce(command)
        .map(AppEvent::ChromeEffect)
}

/// Route a chrome effect event to a host window task.
pub(crate) fn route_effect(effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::MoveWindow { position } => {
            window::latest().and_then(move |id| window::move_to(id, position))
        },
        ChromeEffect::MinimizeWindow => {
            window::latest().and_then(|id| window::minimize(id, true))
        },
        ChromeEffect::QueryMaximized => window::latest()
            .and_then(window::is_maximized)
            .map(|is_maximized| {
                AppEvent::ChromeUi(ChromeEvent::MaximizedStateReported {
                    is_maximized,
                })
            }),
        ChromeEffect::SetMaximized { maximized } => window::latest()
            .and_then(move |id| window::maximize(id, maximized)),
        ChromeEffect::CloseWindow => window::latest().and_then(window::close),
    }
}

/// Map a window-wide mouse event to the chrome event that ends a drag.
///
/// Releases are observed globally so a grab ends even when the button goes
/// up outside the window bounds.
pub(crate) fn map_pointer_release(
    event: &mouse::Event,
) -> Option<ChromeEvent> {
    match event {
        mouse::Event::ButtonReleased(mouse::Button::Left)
        | mouse::Event::CursorLeft => Some(ChromeEvent::PointerReleased),
        _ => None,
    }
}

fn map_chrome_event_to_command(event: ChromeEvent) -> ChromeCommand {
    match event {
        ChromeEvent::CursorMoved { position } => {
            ChromeCommand::TrackCursor { position }
        },
        ChromeEvent::LogoPressed { button } => {
            ChromeCommand::PressLogo { button }
        },
        ChromeEvent::PointerReleased => ChromeCommand::ReleasePointer,
        ChromeEvent::WindowMoved { position } => {
            ChromeCommand::SyncWindowPosition { position }
        },
        ChromeEvent::MinimizeWindow => ChromeCommand::MinimizeWindow,
        ChromeEvent::ToggleMaximize => ChromeCommand::RequestMaximizeToggle,
        ChromeEvent::MaximizedStateReported { is_maximized } => {
            ChromeCommand::ApplyMaximizeToggle { is_maximized }
        },
        ChromeEvent::CloseWindow => ChromeCommand::CloseWindow,
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, mouse};

    use super::{map_chrome_event_to_command, map_pointer_release};
    use crate::widgets::chrome::{ChromeCommand, ChromeEvent, ChromeWidget};

    fn route(widget: &mut ChromeWidget, event: ChromeEvent) {
        let _ = widget.reduce(map_chrome_event_to_command(event));
    }

    #[test]
    fn given_release_outside_window_when_routed_then_drag_ends() {
        let mut widget = ChromeWidget::new(Point::new(100.0, 100.0));
        route(
            &mut widget,
            ChromeEvent::CursorMoved {
                position: Point::new(10.0, 10.0),
            },
        );
        route(
            &mut widget,
            ChromeEvent::LogoPressed {
                button: mouse::Button::Left,
            },
        );
        assert!(widget.vm().is_dragging);

        let release = map_pointer_release(&mouse::Event::ButtonReleased(
            mouse::Button::Left,
        ))
        .expect("left release should end the drag");
        route(&mut widget, release);

        assert!(!widget.vm().is_dragging);
    }

    #[test]
    fn given_cursor_left_when_mapped_then_pointer_is_released() {
        assert!(matches!(
            map_pointer_release(&mouse::Event::CursorLeft),
            Some(ChromeEvent::PointerReleased)
        ));
    }

    #[test]
    fn given_other_mouse_events_when_mapped_then_nothing_is_routed() {
        let ignored = [
            mouse::Event::ButtonReleased(mouse::Button::Right),
            mouse::Event::ButtonPressed(mouse::Button::Left),
            mouse::Event::CursorEntered,
            mouse::Event::CursorMoved {
                position: Point::new(1.0, 1.0),
            },
        ];

        for event in ignored {
            assert!(map_pointer_release(&event).is_none());
        }
    }

    #[test]
    fn given_window_move_report_when_mapped_then_position_is_synced() {
        let command = map_chrome_event_to_command(ChromeEvent::WindowMoved {
            position: Point::new(5.0, 6.0),
        });

        assert!(matches!(
            command,
            ChromeCommand::SyncWindowPosition { position }
                if position == Point::new(5.0, 6.0)
        ));
    }
}
