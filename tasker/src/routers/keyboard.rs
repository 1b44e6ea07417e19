use iced::{Task, keyboard};

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::SidebarEvent;

/// Dispatch key presses bound to sidebar shortcuts.
pub(crate) fn route_event(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match app.widgets.sidebar.action_for_shortcut(&key, modifiers) {
        Some(action) => super::sidebar::route_event(
            app,
            SidebarEvent::ActionTriggered { action },
        ),
        None => Task::none(),
    }
}
