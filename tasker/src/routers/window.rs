use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::chrome::ChromeEvent;

/// Mirror host window geometry into the chrome widget.
pub(crate) fn route_event(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened {
            position: Some(position),
            ..
        }
        | window::Event::Moved(position) => super::chrome::route_event(
            app,
            ChromeEvent::WindowMoved { position },
        ),
        window::Event::Closed => {
            log::info!("main window closed");
            Task::none()
        },
        _ => Task::none(),
    }
}
