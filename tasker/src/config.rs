use std::path::{Path, PathBuf};

use iced::{Point, Size};

/// Environment variable overriding the resources root.
const RESOURCES_DIR_ENV: &str = "TASKER_RESOURCES";

/// Literal startup configuration for the main window.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) style_sheet: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Tasker"),
            position: Point::new(100.0, 100.0),
            size: Size::new(900.0, 600.0),
            style_sheet: String::from("style"),
        }
    }
}

/// Directory holding icons, logos and stylesheets.
pub(crate) fn resources_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(RESOURCES_DIR_ENV) {
        return PathBuf::from(dir);
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join("ressources")
}
