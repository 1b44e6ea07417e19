mod animation;
mod command;
mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod shortcut;
mod state;
pub(crate) mod view;

use iced::Task;
use iced::keyboard::{Key, Modifiers};

pub(crate) use self::command::SidebarCommand;
pub(crate) use self::event::{SidebarEffect, SidebarEvent};
use self::model::{SidebarAction, SidebarButton, SidebarViewModel};
use self::state::SidebarState;

/// Sidebar widget owning its private state.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct an expanded sidebar with its button registry.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce a command into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        command: SidebarCommand,
    ) -> Task<SidebarEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel<'_> {
        SidebarViewModel {
            width: self.state.width(),
            buttons: self.state.buttons(),
        }
    }

    /// Return whether a width animation is in flight.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Look up a registered button by its action name.
    pub(crate) fn button(&self, name: &str) -> Option<&SidebarButton> {
        self.state.button(name)
    }

    /// Resolve a key press to the action of the button bound to it.
    pub(crate) fn action_for_shortcut(
        &self,
        key: &Key,
        modifiers: Modifiers,
    ) -> Option<SidebarAction> {
        self.state.action_for_shortcut(key, modifiers)
    }
}
