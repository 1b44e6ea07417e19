use crate::shared::ui::icons;

/// Affordance shown by the maximize/restore toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum MaximizeAffordance {
    #[default]
    Maximize,
    Restore,
}

impl MaximizeAffordance {
    /// Affordance to show after toggling a window in the given state.
    pub(crate) fn after_toggle(is_maximized: bool) -> Self {
        if is_maximized {
            Self::Maximize
        } else {
            Self::Restore
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Self::Maximize => icons::WINDOW_MAXIMIZE,
            Self::Restore => icons::WINDOW_RESTORE,
        }
    }

    pub(crate) fn tooltip(self) -> &'static str {
        match self {
            Self::Maximize => "Toggle maximize",
            Self::Restore => "Toggle restore",
        }
    }
}

/// View model for the chrome widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel {
    pub(crate) maximize: MaximizeAffordance,
    pub(crate) is_dragging: bool,
}
