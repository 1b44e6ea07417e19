use iced::widget::{column, container, mouse_area, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::components::primitive::section_title::{self, SectionTitleProps};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::ChromeEvent;
use crate::widgets::chrome::view::title_bar::{self, TitleBarProps};
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarViewProps};

const CONTENT_PADDING: f32 = 16.0;
const CONTENT_SECTION_TITLE: &str = "Tasks";

/// Render the root application view.
///
/// The whole window is wrapped in a mouse area so cursor moves reach the
/// chrome drag state wherever the pointer is. Releases arrive through the
/// pointer subscription.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let overrides = theme.widgets();

    let title_bar = title_bar::view(TitleBarProps {
        title: &app.config.title,
        vm: app.widgets.chrome.vm(),
        theme: ThemeProps::new(theme).with_overrides(overrides.title_bar),
        fonts: &app.fonts,
    })
    .map(AppEvent::ChromeUi);

    let sidebar = sidebar_view::view(SidebarViewProps {
        vm: app.widgets.sidebar.vm(),
        theme: ThemeProps::new(theme).with_overrides(overrides.sidebar),
    })
    .map(AppEvent::SidebarUi);

    let content = view_content(app);

    let body = row![sidebar, content]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill);

    let root = column![title_bar, body]
        .spacing(0)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(root)
        .on_move(|position| {
            AppEvent::ChromeUi(ChromeEvent::CursorMoved { position })
        })
        .into()
}

fn view_content(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let props = ThemeProps::new(theme)
        .with_overrides(theme.widgets().section_title);

    let header = section_title::view(SectionTitleProps {
        text: CONTENT_SECTION_TITLE,
        theme: props,
        fonts: &app.fonts,
    });

    container(header)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .into()
}
