use iced::Task;

use super::command::SidebarCommand;
use super::event::SidebarEffect;
use super::model::SidebarAction;
use super::state::SidebarState;

/// Reduce a sidebar command into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    command: SidebarCommand,
) -> Task<SidebarEffect> {
    match command {
        SidebarCommand::TriggerAction {
            action: SidebarAction::ToggleSidebar,
            now,
        } => {
            let target = state.toggle(now);
            log::debug!("sidebar sliding to width {target}");
            Task::none()
        },
        SidebarCommand::TriggerAction { action, .. } => {
            Task::done(SidebarEffect::ReservedAction { action })
        },
        SidebarCommand::AdvanceAnimation { now } => {
            state.advance(now);
            Task::none()
        },
    }
}
