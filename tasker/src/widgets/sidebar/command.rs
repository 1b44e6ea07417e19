use iced::time::Instant;

use super::model::SidebarAction;

/// Commands accepted by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarCommand {
    TriggerAction { action: SidebarAction, now: Instant },
    AdvanceAnimation { now: Instant },
}
