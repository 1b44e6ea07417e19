use iced::widget::{Space, column, container, text};
use iced::{Color, Element, Length};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const SECTION_RULE_WIDTH: f32 = 90.0;
const SECTION_RULE_HEIGHT: f32 = 8.0;
const SECTION_SPACING: f32 = 4.0;

/// Props for rendering a section title.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionTitleProps<'a> {
    pub(crate) text: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render an upper-cased label over a short horizontal rule.
pub(crate) fn view<'a, Message: 'a>(
    props: SectionTitleProps<'a>,
) -> Element<'a, Message> {
    let colors = SectionTitleColors::resolve(props.theme);

    let label = text(section_label(props.text))
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type)
        .color(colors.label);

    let rule = container(Space::new())
        .width(Length::Fixed(SECTION_RULE_WIDTH))
        .height(Length::Fixed(SECTION_RULE_HEIGHT))
        .style(move |_| container::Style {
            background: Some(colors.rule.into()),
            ..Default::default()
        });

    let background = colors.background;
    container(column![label, rule].spacing(SECTION_SPACING))
        .style(move |_| container::Style {
            background: background.map(Into::into),
            ..Default::default()
        })
        .into()
}

/// Colors of a section title after applying widget overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SectionTitleColors {
    label: Color,
    rule: Color,
    background: Option<Color>,
}

impl SectionTitleColors {
    fn resolve(theme: ThemeProps<'_>) -> Self {
        let palette = theme.theme.iced_palette();

        Self {
            label: theme.foreground_or(palette.foreground),
            rule: theme.accent_or(palette.accent),
            background: theme.background_override(),
        }
    }
}

fn section_label(text: &str) -> String {
    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{SectionTitleColors, section_label};
    use crate::shared::ui::theme::{AppTheme, StyleOverrides, ThemeProps};

    #[test]
    fn given_mixed_case_text_when_labelled_then_it_is_upper_cased() {
        assert_eq!(section_label("Task lists"), "TASK LISTS");
    }

    #[test]
    fn given_no_overrides_when_resolving_then_palette_colors_are_used() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let colors = SectionTitleColors::resolve(ThemeProps::new(&theme));

        assert_eq!(colors.label, palette.foreground);
        assert_eq!(colors.rule, palette.accent);
        assert_eq!(colors.background, None);
    }

    #[test]
    fn given_background_override_when_resolving_then_rule_keeps_accent() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();
        let background = Color::from_rgb(0.1, 0.1, 0.1);
        let props = ThemeProps::new(&theme).with_overrides(Some(
            StyleOverrides {
                background: Some(background),
                ..StyleOverrides::default()
            },
        ));

        let colors = SectionTitleColors::resolve(props);

        assert_eq!(colors.background, Some(background));
        assert_eq!(colors.rule, palette.accent);
    }

    #[test]
    fn given_accent_override_when_resolving_then_rule_uses_it() {
        let theme = AppTheme::default();
        let accent = Color::from_rgb(0.9, 0.4, 0.1);
        let props = ThemeProps::new(&theme).with_overrides(Some(
            StyleOverrides {
                accent: Some(accent),
                ..StyleOverrides::default()
            },
        ));

        assert_eq!(SectionTitleColors::resolve(props).rule, accent);
    }
}
