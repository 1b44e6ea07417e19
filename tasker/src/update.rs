use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Chrome widget
        AppEvent::ChromeUi(event) => routers::chrome::route_event(app, event),
        AppEvent::ChromeEffect(effect) => routers::chrome::route_effect(effect),
        // Sidebar widget
        AppEvent::SidebarUi(event) => routers::sidebar::route_event(app, event),
        AppEvent::SidebarEffect(effect) => {
            routers::sidebar::route_effect(app, effect)
        },
        // Host events
        AppEvent::Keyboard(event) => routers::keyboard::route_event(app, event),
        AppEvent::Window(event) => routers::window::route_event(app, event),
    }
}
