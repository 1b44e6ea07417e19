use iced::time::Duration;
use iced::{Event, Subscription, event, window};

use crate::app::{App, AppEvent};
use crate::routers::chrome::map_pointer_release;
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::model::SIDEBAR_ANIMATION_TICK_MS;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let release_subs = event::listen_with(pointer_release);

    let mut subs = vec![win_subs, key_subs, release_subs];

    // Frame ticks only while the sidebar is sliding.
    if app.widgets.sidebar.is_animating() {
        let tick = iced::time::every(Duration::from_millis(
            SIDEBAR_ANIMATION_TICK_MS,
        ))
        .map(|now| AppEvent::SidebarUi(SidebarEvent::AnimationTick { now }));
        subs.push(tick);
    }

    Subscription::batch(subs)
}

fn pointer_release(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let Event::Mouse(mouse_event) = event else {
        return None;
    };

    map_pointer_release(&mouse_event).map(AppEvent::ChromeUi)
}
