//! Vitrine Gallery - three-carousel desktop gallery viewer
//!
//! Entry point: loads configuration, theme, and the gallery manifest,
//! resolves slide images from disk, then launches the iced application.

mod config;
mod images;
mod ui;

use iced::{Size, Task};

use ui::app::Message;
use ui::{theme, GalleryApp};

use vitrine_core::Gallery;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("vitrine-gallery starting up");

    let config_path = config::default_config_path();
    let gallery_config = config::load_config(&config_path);

    // Write the defaults on first run so users have a file to edit
    if !config_path.exists() {
        if let Err(e) = config::save_config(&gallery_config, &config_path) {
            log::warn!("Could not write default config: {:#}", e);
        }
    }

    // Initialize theme from ~/.config/vitrine-gallery/theme.yaml
    theme::init_theme();

    let gallery = Gallery::load(&gallery_config.gallery_path);
    log::info!("Gallery ready with {} entries", gallery.entries.len());

    let window_size = Size::new(gallery_config.window.width, gallery_config.window.height);

    // Wrap the prepared state in a cell so the boot closure can be Fn
    // (iced requires Fn even though boot only runs once)
    let boot_cell = std::cell::RefCell::new(Some((gallery_config, gallery)));

    iced::application(
        move || {
            let (gallery_config, gallery) = boot_cell
                .borrow_mut()
                .take()
                .expect("boot state already taken");
            let app = GalleryApp::new(gallery_config, gallery);
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(app_theme)
    .title("Vitrine Gallery")
    .window_size(window_size)
    .run()
}

/// Update function for iced
fn update(app: &mut GalleryApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &GalleryApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &GalleryApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn app_theme(app: &GalleryApp) -> iced::Theme {
    app.theme()
}
