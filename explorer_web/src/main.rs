mod app;
mod fetcher;
mod host;
mod logger;
mod renderers;
mod style;

use log::LevelFilter;

use crate::app::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(err) = logger::init(level) {
        gloo::console::error!(format!("Failed to install logger: {err}"));
    }

    if let Err(err) = style::inject_css() {
        log::error!("Failed to inject stylesheet: {err}");
    }

    yew::Renderer::<App>::new().render();
}
