use iced::theme::Palette;
use iced::{Color, Theme};
use serde::Deserialize;

use super::style_sheet::{
    StyleSheet, StyleSheetLoadStatus, WidgetStyle, load_style_sheet,
};

/// Hex palette as declared in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) dim_foreground: String,
    pub(crate) accent: String,
    pub(crate) danger: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            surface: String::from("#0F1115"),
            dim_foreground: String::from("#6B7280"),
            accent: String::from("#4FA6ED"),
            danger: String::from("#E06C75"),
            success: String::from("#98C379"),
            warning: String::from("#E5C07B"),
            overlay: String::from("#232530"),
        }
    }
}

/// Resolved palette ready for widget styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) danger: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let d = ColorPalette::default();

        Self {
            foreground: color_or_default(&p.foreground, &d.foreground),
            background: color_or_default(&p.background, &d.background),
            surface: color_or_default(&p.surface, &d.surface),
            dim_foreground: color_or_default(
                &p.dim_foreground,
                &d.dim_foreground,
            ),
            accent: color_or_default(&p.accent, &d.accent),
            danger: color_or_default(&p.danger, &d.danger),
            success: color_or_default(&p.success, &d.success),
            warning: color_or_default(&p.warning, &d.warning),
            overlay: color_or_default(&p.overlay, &d.overlay),
        }
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
    pub(crate) accent: Option<Color>,
}

impl From<&WidgetStyle> for StyleOverrides {
    fn from(style: &WidgetStyle) -> Self {
        Self {
            background: style.background.as_deref().and_then(parse_or_warn),
            foreground: style.foreground.as_deref().and_then(parse_or_warn),
            accent: style.accent.as_deref().and_then(parse_or_warn),
        }
    }
}

/// Per-widget overrides taken from the stylesheet.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct WidgetOverrides {
    pub(crate) title_bar: Option<StyleOverrides>,
    pub(crate) sidebar: Option<StyleOverrides>,
    pub(crate) section_title: Option<StyleOverrides>,
}

/// Global application theme built from a stylesheet.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
    widgets: WidgetOverrides,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_style_sheet(
            String::from("default"),
            &StyleSheet::default(),
        )
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id().to_string(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a parsed stylesheet.
    pub(crate) fn from_style_sheet(id: String, sheet: &StyleSheet) -> Self {
        let widgets = WidgetOverrides {
            title_bar: sheet.widgets.title_bar.as_ref().map(Into::into),
            sidebar: sheet.widgets.sidebar.as_ref().map(Into::into),
            section_title: sheet
                .widgets
                .section_title
                .as_ref()
                .map(Into::into),
        };

        Self {
            id,
            iced_palette: IcedColorPalette::from(&sheet.palette),
            widgets,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }

    pub(crate) fn widgets(&self) -> WidgetOverrides {
        self.widgets
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub(crate) fn with_overrides(
        mut self,
        overrides: Option<StyleOverrides>,
    ) -> Self {
        self.overrides = overrides;
        self
    }

    /// Background color, honouring widget overrides.
    pub(crate) fn background_or(&self, default_color: Color) -> Color {
        self.overrides
            .and_then(|o| o.background)
            .unwrap_or(default_color)
    }

    /// Foreground color, honouring widget overrides.
    pub(crate) fn foreground_or(&self, default_color: Color) -> Color {
        self.overrides
            .and_then(|o| o.foreground)
            .unwrap_or(default_color)
    }

    /// Accent color, honouring widget overrides.
    pub(crate) fn accent_or(&self, default_color: Color) -> Color {
        self.overrides
            .and_then(|o| o.accent)
            .unwrap_or(default_color)
    }

    /// Background override, if the widget declares one.
    pub(crate) fn background_override(&self) -> Option<Color> {
        self.overrides.and_then(|o| o.background)
    }
}

/// Owns the theme applied to the main window.
#[derive(Debug, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    /// Load the named stylesheet and build the theme from it.
    ///
    /// A missing or malformed stylesheet leaves the built-in palette in place.
    pub(crate) fn load(name: &str) -> Self {
        let sheet = match load_style_sheet(name) {
            Ok(load) => {
                let (sheet, status) = load.into_parts();
                match status {
                    StyleSheetLoadStatus::Loaded => {
                        log::info!("stylesheet '{name}' loaded");
                    },
                    StyleSheetLoadStatus::Missing => {
                        log::warn!(
                            "stylesheet '{name}' not found, using defaults"
                        );
                    },
                    StyleSheetLoadStatus::Invalid(message) => {
                        log::warn!(
                            "stylesheet '{name}' is invalid ({message}), using defaults"
                        );
                    },
                }
                sheet
            },
            Err(err) => {
                log::warn!("stylesheet '{name}' could not be read: {err}");
                StyleSheet::default()
            },
        };

        Self {
            current: AppTheme::from_style_sheet(name.to_string(), &sheet),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |index: usize| {
        hex.get(index..index + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    match hex.len() {
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            f32::from(channel(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_or_warn(value: &str) -> Option<Color> {
    let color = parse_hex_color(value);
    if color.is_none() {
        log::warn!("ignoring invalid stylesheet color {value:?}");
    }
    color
}

fn color_or_default(value: &str, fallback: &str) -> Color {
    parse_or_warn(value)
        .or_else(|| parse_hex_color(fallback))
        .unwrap_or(Color::BLACK)
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{
        AppTheme, ColorPalette, IcedColorPalette, StyleOverrides, ThemeProps,
        parse_hex_color,
    };
    use crate::shared::ui::style_sheet::{StyleSheet, WidgetStyle};

    #[test]
    fn given_rgb_hex_when_parsed_then_returns_opaque_color() {
        let color = parse_hex_color("#FF8000").expect("valid color");
        assert_eq!(color, Color::from_rgb8(0xFF, 0x80, 0x00));
    }

    #[test]
    fn given_rgba_hex_when_parsed_then_alpha_is_applied() {
        let color = parse_hex_color("#00000080").expect("valid color");
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_returns_none() {
        assert_eq!(parse_hex_color("FF8000"), None);
        assert_eq!(parse_hex_color("#FF80"), None);
        assert_eq!(parse_hex_color("#GG8000"), None);
        assert_eq!(parse_hex_color("#+F8000"), None);
    }

    #[test]
    fn given_invalid_palette_entry_when_resolved_then_default_entry_is_used()
    {
        let palette = ColorPalette {
            accent: String::from("not-a-color"),
            ..ColorPalette::default()
        };

        let resolved = IcedColorPalette::from(&palette);
        let defaults = IcedColorPalette::from(&ColorPalette::default());

        assert_eq!(resolved.accent, defaults.accent);
    }

    #[test]
    fn given_widget_style_when_building_theme_then_overrides_are_exposed() {
        let mut sheet = StyleSheet::default();
        sheet.widgets.title_bar = Some(WidgetStyle {
            background: Some(String::from("#102030")),
            foreground: None,
            accent: None,
        });

        let theme = AppTheme::from_style_sheet(String::from("style"), &sheet);
        let overrides = theme.widgets().title_bar.expect("title bar override");

        assert_eq!(
            overrides.background,
            Some(Color::from_rgb8(0x10, 0x20, 0x30))
        );
        assert_eq!(overrides.foreground, None);
        assert!(theme.widgets().sidebar.is_none());
        assert_eq!(theme.id(), "style");
    }

    #[test]
    fn given_foreground_override_when_resolving_then_default_background_is_kept()
     {
        let theme = AppTheme::default();
        let override_color = Color::from_rgb(0.3, 0.2, 0.1);
        let props = ThemeProps::new(&theme).with_overrides(Some(
            StyleOverrides {
                background: None,
                foreground: Some(override_color),
                accent: None,
            },
        ));

        assert_eq!(props.foreground_or(Color::WHITE), override_color);
        assert_eq!(props.background_or(Color::WHITE), Color::WHITE);
    }

    #[test]
    fn given_accent_in_widget_style_when_building_theme_then_it_stays_separate()
    {
        let mut sheet = StyleSheet::default();
        sheet.widgets.section_title = Some(WidgetStyle {
            accent: Some(String::from("#AABBCC")),
            ..WidgetStyle::default()
        });

        let theme = AppTheme::from_style_sheet(String::from("style"), &sheet);
        let overrides = theme
            .widgets()
            .section_title
            .expect("section title override");

        assert_eq!(overrides.accent, Some(Color::from_rgb8(0xAA, 0xBB, 0xCC)));
        assert_eq!(overrides.background, None);
    }
}
