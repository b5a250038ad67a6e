//! Post Feed Frontend Entry Point

use leptos::prelude::*;
use log::LevelFilter;

use post_feed_ui::app::App;
use post_feed_ui::config;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(LevelFilter::Info);

    let config = config::load();
    match console_logger::parse_level(&config.log_level) {
        Some(level) => console_logger::init(level),
        None => log::warn!("unknown log level '{}', keeping info", config.log_level),
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
