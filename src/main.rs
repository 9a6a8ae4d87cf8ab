use std::sync::Arc;

use fltk::{app, dialog, prelude::*};

use ferris_link::app::domain::{AppSettings, Message};
use ferris_link::app::infrastructure::error::Result;
use ferris_link::app::infrastructure::logging::init_logging;
use ferris_link::app::infrastructure::platform::PlatformPreference;
use ferris_link::app::infrastructure::storage::JsonFileStore;
use ferris_link::app::page::{Notifier, Page};
use ferris_link::app::services::shortener::HttpShortener;
use ferris_link::app::services::theme::ThemeResolver;
use ferris_link::ui::main_window::build_main_window;

fn run() -> Result<()> {
    let settings = AppSettings::load();
    let origin = settings.origin()?;
    tracing::info!(service = %settings.service_url, %origin, "starting FerrisLink");

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let notify: Notifier = Arc::new(move |message| sender.send(message));
    let theme = ThemeResolver::new(JsonFileStore::open_default(), PlatformPreference);
    let client = Arc::new(HttpShortener::from_settings(&settings));
    let mut page = Page::new(client, origin, theme, notify);

    let mut widgets = build_main_window(&sender);
    widgets.wind.show();
    page.start(&mut widgets);

    while app.wait() {
        if let Some(message) = receiver.recv() {
            if !page.handle(message, &mut widgets) {
                app.quit();
            }
        }
    }

    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        dialog::alert_default(&format!("FerrisLink could not start: {}", e));
        std::process::exit(1);
    }
}
