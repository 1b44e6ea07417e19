use iced::Font;
use iced::font::Weight;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

/// Heading font used by the title bar brand zone.
#[derive(Debug, Clone)]
pub(crate) struct TitleFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for TitleFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            size: 24.0,
        }
    }
}

/// Combined font configuration for the shell.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) title: TitleFonts,
}
