use iced::time::Duration;

use super::shortcut::Shortcut;
use crate::shared::ui::icons;

pub(crate) const SIDEBAR_EXPANDED_WIDTH: f32 = 60.0;
pub(crate) const SIDEBAR_COLLAPSED_WIDTH: f32 = 0.0;
/// Widths strictly above this count as expanded.
pub(crate) const SIDEBAR_COLLAPSE_THRESHOLD: f32 = 30.0;
pub(crate) const SIDEBAR_ANIMATION_DURATION: Duration =
    Duration::from_millis(300);
pub(crate) const SIDEBAR_ANIMATION_TICK_MS: u64 = 16;

/// Action bound to a sidebar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarAction {
    ToggleSidebar,
    ShowTaskLists,
    AddTaskList,
    Settings,
}

impl SidebarAction {
    /// Name of the registered button bound to this action.
    pub(crate) fn name(self) -> &'static str {
        SIDEBAR_BUTTONS
            .iter()
            .find(|spec| spec.action == self)
            .map(|spec| spec.name)
            .unwrap_or("unregistered action")
    }
}

/// Literal declaration of a sidebar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarButtonSpec {
    pub(crate) name: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) shortcut: &'static str,
    pub(crate) action: SidebarAction,
}

/// Sidebar buttons in display order.
pub(crate) const SIDEBAR_BUTTONS: [SidebarButtonSpec; 4] = [
    SidebarButtonSpec {
        name: "Close side bar",
        icon: icons::SIDEBAR_COLLAPSE,
        shortcut: "ctrl+shift+t",
        action: SidebarAction::ToggleSidebar,
    },
    SidebarButtonSpec {
        name: "Show task lists",
        icon: icons::SIDEBAR_TASK_LISTS,
        shortcut: "ctrl+shift+e",
        action: SidebarAction::ShowTaskLists,
    },
    SidebarButtonSpec {
        name: "Add task list",
        icon: icons::SIDEBAR_NEW_TASK_LIST,
        shortcut: "ctrl+shift+n",
        action: SidebarAction::AddTaskList,
    },
    SidebarButtonSpec {
        name: "Settings",
        icon: icons::SIDEBAR_SETTINGS,
        shortcut: "ctrl+shift+s",
        action: SidebarAction::Settings,
    },
];

/// A constructed sidebar button.
#[derive(Debug, Clone)]
pub(crate) struct SidebarButton {
    spec: SidebarButtonSpec,
    shortcut: Option<Shortcut>,
    tooltip: String,
}

impl SidebarButton {
    /// Build a button, leaving it unbound when its shortcut is invalid.
    pub(crate) fn new(spec: SidebarButtonSpec) -> Self {
        let shortcut = match spec.shortcut.parse::<Shortcut>() {
            Ok(shortcut) => {
                log::debug!("bound {shortcut} to '{}'", spec.name);
                Some(shortcut)
            },
            Err(err) => {
                log::warn!(
                    "sidebar button '{}' has invalid shortcut {:?}: {err}",
                    spec.name,
                    spec.shortcut
                );
                None
            },
        };

        Self {
            spec,
            shortcut,
            tooltip: format!("{} ({})", spec.name, spec.shortcut),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.spec.name
    }

    pub(crate) fn icon(&self) -> &'static str {
        self.spec.icon
    }

    pub(crate) fn action(&self) -> SidebarAction {
        self.spec.action
    }

    pub(crate) fn shortcut(&self) -> Option<&Shortcut> {
        self.shortcut.as_ref()
    }

    pub(crate) fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// Build the button registry from the literal table.
pub(crate) fn build_registry() -> Vec<SidebarButton> {
    SIDEBAR_BUTTONS.into_iter().map(SidebarButton::new).collect()
}

/// Width the sidebar should animate towards from `current`.
pub(crate) fn toggle_target(current: f32) -> f32 {
    if current > SIDEBAR_COLLAPSE_THRESHOLD {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_EXPANDED_WIDTH
    }
}

/// Read-only view model for the sidebar presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) width: f32,
    pub(crate) buttons: &'a [SidebarButton],
}
