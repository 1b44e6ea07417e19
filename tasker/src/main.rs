mod app;
mod components;
mod config;
mod routers;
mod shared;
mod widgets;

use env_logger::Env;
use iced::window;
use image::ImageFormat;

use crate::app::App;
use crate::config::WindowConfig;
use crate::shared::ui::icons::{APP_ICON, resource_path};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = WindowConfig::default();

    // Native decorations are replaced by the chrome widget's title bar.
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: config.size,
            position: window::Position::Specific(config.position),
            decorations: false,
            icon: load_window_icon(),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

fn load_window_icon() -> Option<window::Icon> {
    let path = resource_path(APP_ICON);
    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("window icon {} unavailable: {err}", path.display());
            return None;
        },
    };

    match window::icon::from_file_data(&data, Some(ImageFormat::Png)) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("window icon {} is not a PNG: {err}", path.display());
            None
        },
    }
}
