use iced::widget::{button, container, svg, text, tooltip};
use iced::{Element, Length, alignment};

use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, StyleOverrides, ThemeProps};

const ICON_BUTTON_PADDING: f32 = 0.0;
const TOOLTIP_TEXT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 4.0;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    /// Resource-relative icon path.
    pub(crate) icon: &'static str,
    pub(crate) tooltip: &'a str,
    pub(crate) tooltip_position: tooltip::Position,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Render a square icon button with a hover tooltip.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = *props.theme.theme.iced_palette();
    let (base_color, hover_color) =
        resolve_variant_colors(props.variant, &palette, props.theme.overrides);

    let icon = svg::Svg::new(icons::svg_handle(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let icon_button = button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(|_, _| iced::widget::button::Style::default());

    let label = container(text(props.tooltip).size(TOOLTIP_TEXT_SIZE))
        .padding(TOOLTIP_PADDING)
        .style(move |_| container::Style {
            background: Some(palette.overlay.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        });

    tooltip(icon_button, label, props.tooltip_position).into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    palette: &IcedColorPalette,
    overrides: Option<StyleOverrides>,
) -> (iced::Color, iced::Color) {
    let base = overrides
        .and_then(|o| o.foreground)
        .unwrap_or(palette.dim_foreground);

    match variant {
        IconButtonVariant::Standard => (base, palette.accent),
        IconButtonVariant::Danger => (base, palette.danger),
    }
}

#[cfg(test)]
mod tests {
    use super::{IconButtonVariant, resolve_variant_colors};
    use crate::shared::ui::theme::{AppTheme, StyleOverrides};

    #[test]
    fn given_standard_variant_when_resolving_without_override_then_hover_uses_accent()
     {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let (base, hover) =
            resolve_variant_colors(IconButtonVariant::Standard, palette, None);

        assert_eq!(base, palette.dim_foreground);
        assert_eq!(hover, palette.accent);
    }

    #[test]
    fn given_danger_variant_when_resolving_without_override_then_hover_uses_danger()
     {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let (base, hover) =
            resolve_variant_colors(IconButtonVariant::Danger, palette, None);

        assert_eq!(base, palette.dim_foreground);
        assert_eq!(hover, palette.danger);
    }

    #[test]
    fn given_foreground_override_when_resolving_then_base_uses_override_and_hover_keeps_accent()
     {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();
        let override_color = iced::Color::from_rgb(0.3, 0.2, 0.1);
        let overrides = Some(StyleOverrides {
            background: None,
            foreground: Some(override_color),
            accent: None,
        });

        let (base, hover) = resolve_variant_colors(
            IconButtonVariant::Standard,
            palette,
            overrides,
        );

        assert_eq!(base, override_color);
        assert_eq!(hover, palette.accent);
    }
}
