use iced::{Point, mouse};

/// UI events emitted by chrome views and host window reports.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Cursor moved, in window coordinates.
    CursorMoved { position: Point },
    LogoPressed { button: mouse::Button },
    PointerReleased,
    /// The host reported a new window position.
    WindowMoved { position: Point },
    MinimizeWindow,
    ToggleMaximize,
    /// The host answered a maximized-state query.
    MaximizedStateReported { is_maximized: bool },
    CloseWindow,
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEffect {
    MoveWindow { position: Point },
    MinimizeWindow,
    QueryMaximized,
    SetMaximized { maximized: bool },
    CloseWindow,
}
