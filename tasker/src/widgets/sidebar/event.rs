use iced::time::Instant;

use super::model::SidebarAction;

/// UI events emitted by the sidebar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    ActionTriggered { action: SidebarAction },
    AnimationTick { now: Instant },
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    /// A button with no wired behavior was activated.
    ReservedAction { action: SidebarAction },
}
