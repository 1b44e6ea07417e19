use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::errors::StyleSheetError;
use super::theme::ColorPalette;
use crate::config::resources_dir;

/// Colors applied to a single themed widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct WidgetStyle {
    pub(crate) background: Option<String>,
    pub(crate) foreground: Option<String>,
    /// Decoration color, such as the rule under a section title.
    pub(crate) accent: Option<String>,
}

/// Per-widget sections of a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct WidgetStyles {
    pub(crate) title_bar: Option<WidgetStyle>,
    pub(crate) sidebar: Option<WidgetStyle>,
    pub(crate) section_title: Option<WidgetStyle>,
}

/// A named stylesheet resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct StyleSheet {
    pub(crate) palette: ColorPalette,
    pub(crate) widgets: WidgetStyles,
}

/// Status describing how a stylesheet was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum StyleSheetLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading a stylesheet from disk.
#[derive(Debug, Clone)]
pub(crate) struct StyleSheetLoad {
    sheet: StyleSheet,
    status: StyleSheetLoadStatus,
}

impl StyleSheetLoad {
    pub(crate) fn new(sheet: StyleSheet, status: StyleSheetLoadStatus) -> Self {
        Self { sheet, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (StyleSheet, StyleSheetLoadStatus) {
        (self.sheet, self.status)
    }
}

/// Load the stylesheet with the given name from the resources directory.
pub(crate) fn load_style_sheet(
    name: &str,
) -> Result<StyleSheetLoad, StyleSheetError> {
    load_style_sheet_from_path(&style_sheet_path(name))
}

fn load_style_sheet_from_path(
    path: &Path,
) -> Result<StyleSheetLoad, StyleSheetError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(StyleSheetLoad::new(
                StyleSheet::default(),
                StyleSheetLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<StyleSheet>(&data) {
        Ok(sheet) => {
            Ok(StyleSheetLoad::new(sheet, StyleSheetLoadStatus::Loaded))
        },
        Err(err) => Ok(StyleSheetLoad::new(
            StyleSheet::default(),
            StyleSheetLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn style_sheet_path(name: &str) -> PathBuf {
    resources_dir().join("styles").join(format!("{name}.json"))
}
