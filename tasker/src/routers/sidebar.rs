use iced::Task;
use iced::time::Instant;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarCommand, SidebarEffect, SidebarEvent};

/// Route a sidebar UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: SidebarEvent,
) -> Task<AppEvent> {
    let command = map_sidebar_event_to_command(event);
    app.widgets
        .sidebar
        .reduce(command)
        .map(AppEvent::SidebarEffect)
}

/// Route a sidebar effect event to app-level handling.
pub(crate) fn route_effect(app: &App, effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::ReservedAction { action } => {
            let tooltip = app
                .widgets
                .sidebar
                .button(action.name())
                .map(|button| button.tooltip())
                .unwrap_or(action.name());
            log::debug!("'{tooltip}' has no behavior wired yet");
            Task::none()
        },
    }
}

fn map_sidebar_event_to_command(event: SidebarEvent) -> SidebarCommand {
    match event {
        SidebarEvent::ActionTriggered { action } => {
            SidebarCommand::TriggerAction {
                action,
                now: Instant::now(),
            }
        },
        SidebarEvent::AnimationTick { now } => {
            SidebarCommand::AdvanceAnimation { now }
        },
    }
}
