mod command;
mod drag;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::{Point, Task};

pub(crate) use self::command::ChromeCommand;
pub(crate) use self::event::{ChromeEffect, ChromeEvent};
use self::model::ChromeViewModel;
use self::state::ChromeState;

/// Chrome widget managing the custom title bar and window controls.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    /// Create the chrome widget for a window opened at `window_position`.
    pub(crate) fn new(window_position: Point) -> Self {
        Self {
            state: ChromeState::new(window_position),
        }
    }

    /// Reduce a chrome command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ChromeCommand,
    ) -> Task<ChromeEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            maximize: self.state.affordance(),
            is_dragging: self.state.is_dragging(),
        }
    }
}
