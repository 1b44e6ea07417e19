use iced::widget::{Space, container, row, tooltip};
use iced::{Element, Length, alignment};

use super::super::event::ChromeEvent;
use super::super::model::ChromeViewModel;
use super::app_logo::{self, AppLogoProps};
use crate::components::primitive::icon_button::{
    IconButtonEvent, IconButtonProps, IconButtonVariant,
    view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{WINDOW_CLOSE, WINDOW_MINIMIZE};
use crate::shared::ui::theme::ThemeProps;

pub(crate) const TITLE_BAR_HEIGHT: f32 = 50.0;
const TITLE_BAR_CONTROL_BUTTON_SIZE: f32 = 35.0;
const TITLE_BAR_CONTROL_ICON_SIZE: f32 = 18.0;
const TITLE_BAR_RIGHT_PADDING: f32 = 8.0;
const TITLE_BAR_CONTROLS_SPACING: f32 = 6.0;

/// Props for rendering the title bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TitleBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the custom window header: brand zone plus window controls.
pub(crate) fn view<'a>(props: TitleBarProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = props.theme.background_or(palette.surface);

    let logo = app_logo::view(AppLogoProps {
        title: props.title,
        is_dragging: props.vm.is_dragging,
        theme: props.theme,
        fonts: props.fonts,
    });

    let maximize = props.vm.maximize;
    let controls_row = row![
        control_button(
            WINDOW_MINIMIZE,
            "Minimize window",
            IconButtonVariant::Standard,
            props.theme,
        )
        .map(|_| ChromeEvent::MinimizeWindow),
        control_button(
            maximize.icon(),
            maximize.tooltip(),
            IconButtonVariant::Standard,
            props.theme,
        )
        .map(|_| ChromeEvent::ToggleMaximize),
        control_button(
            WINDOW_CLOSE,
            "Close app",
            IconButtonVariant::Danger,
            props.theme,
        )
        .map(|_| ChromeEvent::CloseWindow),
    ]
    .spacing(TITLE_BAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center);

    let controls_container = container(controls_row)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, TITLE_BAR_RIGHT_PADDING]);

    let content =
        row![logo, Space::new().width(Length::Fill), controls_container]
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TITLE_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn control_button<'a>(
    icon: &'static str,
    label: &'a str,
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    icon_button_view(IconButtonProps {
        icon,
        tooltip: label,
        tooltip_position: tooltip::Position::Bottom,
        theme,
        size: TITLE_BAR_CONTROL_BUTTON_SIZE,
        icon_size: TITLE_BAR_CONTROL_ICON_SIZE,
        variant,
    })
}
