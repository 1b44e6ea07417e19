use iced::widget::{container, mouse_area, text};
use iced::{Element, Length, alignment, mouse};

use super::super::event::ChromeEvent;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const APP_LOGO_HORIZONTAL_PADDING: f32 = 16.0;

/// Props for rendering the draggable brand zone.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppLogoProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) is_dragging: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the application title as the window drag handle.
pub(crate) fn view<'a>(props: AppLogoProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = props.theme.theme.iced_palette();
    let title_color = props.theme.foreground_or(palette.foreground);

    let title = text(props.title)
        .size(props.fonts.title.size)
        .font(props.fonts.title.font_type)
        .color(title_color);

    let zone = container(title)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, APP_LOGO_HORIZONTAL_PADDING]);

    let interaction = if props.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(zone)
        .on_press(ChromeEvent::LogoPressed {
            button: mouse::Button::Left,
        })
        .on_right_press(ChromeEvent::LogoPressed {
            button: mouse::Button::Right,
        })
        .on_middle_press(ChromeEvent::LogoPressed {
            button: mouse::Button::Middle,
        })
        .interaction(interaction)
        .into()
}
