#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme, keyboard, window};

use crate::config::WindowConfig;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeWidget};
use crate::widgets::sidebar::{SidebarEffect, SidebarEvent, SidebarWidget};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Chrome widget
    ChromeUi(ChromeEvent),
    ChromeEffect(ChromeEffect),
    // Sidebar widget
    SidebarUi(SidebarEvent),
    SidebarEffect(SidebarEffect),
    // Host events
    Keyboard(keyboard::Event),
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) chrome: ChromeWidget,
    pub(crate) sidebar: SidebarWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: WindowConfig,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        (Self::with_config(WindowConfig::default()), Task::none())
    }

    /// Build the shell for the given startup configuration.
    pub(crate) fn with_config(config: WindowConfig) -> Self {
        let theme_manager = ThemeManager::load(&config.style_sheet);
        let widgets = Widgets {
            chrome: ChromeWidget::new(config.position),
            sidebar: SidebarWidget::new(),
        };

        Self {
            config,
            theme_manager,
            fonts: FontsConfig::default(),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
