use iced::widget::{column, container, tooltip};
use iced::{Element, Length, Theme, alignment};

use super::event::SidebarEvent;
use super::model::{SidebarButton, SidebarViewModel};
use crate::components::primitive::icon_button::{
    IconButtonProps, IconButtonVariant, view as icon_button_view,
};
use crate::shared::ui::theme::ThemeProps;

const SIDEBAR_BUTTON_SIZE: f32 = 50.0;
const SIDEBAR_ICON_SIZE: f32 = 24.0;
const SIDEBAR_BUTTON_SPACING: f32 = 4.0;
const SIDEBAR_VERTICAL_PADDING: f32 = 5.0;

/// Props for the sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the sidebar rail at its current animated width.
///
/// Content is clipped so the buttons slide out of view as the width shrinks.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let background = props.theme.background_or(palette.surface);

    let buttons = props
        .vm
        .buttons
        .iter()
        .map(|button| sidebar_button(button, props.theme));

    let content = column(buttons)
        .spacing(SIDEBAR_BUTTON_SPACING)
        .padding([SIDEBAR_VERTICAL_PADDING, 0.0])
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fixed(props.vm.width.max(0.0)))
        .height(Length::Fill)
        .align_y(alignment::Vertical::Top)
        .clip(true)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn sidebar_button<'a>(
    button: &'a SidebarButton,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent, Theme, iced::Renderer> {
    let action = button.action();

    icon_button_view(IconButtonProps {
        icon: button.icon(),
        tooltip: button.tooltip(),
        tooltip_position: tooltip::Position::Right,
        theme,
        size: SIDEBAR_BUTTON_SIZE,
        icon_size: SIDEBAR_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(move |_| SidebarEvent::ActionTriggered { action })
}
