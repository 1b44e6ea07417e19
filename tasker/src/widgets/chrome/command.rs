use iced::{Point, mouse};

/// Commands processed by the chrome widget reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeCommand {
    TrackCursor { position: Point },
    PressLogo { button: mouse::Button },
    ReleasePointer,
    SyncWindowPosition { position: Point },
    MinimizeWindow,
    RequestMaximizeToggle,
    ApplyMaximizeToggle { is_maximized: bool },
    CloseWindow,
}
