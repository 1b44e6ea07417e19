use std::path::PathBuf;

use iced::widget::svg;

use crate::config::resources_dir;

pub(crate) const WINDOW_MINIMIZE: &str = "icons/minimize.svg";
pub(crate) const WINDOW_MAXIMIZE: &str = "icons/maximize.svg";
pub(crate) const WINDOW_RESTORE: &str = "icons/resize.svg";
pub(crate) const WINDOW_CLOSE: &str = "icons/cross.svg";
pub(crate) const SIDEBAR_COLLAPSE: &str = "icons/left.svg";
pub(crate) const SIDEBAR_TASK_LISTS: &str = "icons/tasklists.svg";
pub(crate) const SIDEBAR_NEW_TASK_LIST: &str = "icons/new_tasklist.svg";
pub(crate) const SIDEBAR_SETTINGS: &str = "icons/settings.svg";
pub(crate) const APP_ICON: &str = "logo/tasker.png";

/// Resolve a resource-relative path against the resources root.
pub(crate) fn resource_path(relative: &str) -> PathBuf {
    resources_dir().join(relative)
}

/// Build an SVG handle for a resource icon.
///
/// The file is read lazily by the renderer; a missing file draws nothing.
pub(crate) fn svg_handle(relative: &str) -> svg::Handle {
    svg::Handle::from_path(resource_path(relative))
}
