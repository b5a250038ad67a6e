//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the browser console on
//! wasm32 and to stderr everywhere else, so native tests still see them.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing one formatted line per record.
///
/// Filtering uses the global `log::max_level()`, so the level can change
/// after installation.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the logger as the global `log` backend at `level`.
///
/// The backend is installed once; later calls only change the level.
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(ConsoleLogger::default);
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}

/// Parse a level name (`"debug"`, `"WARN"`, ...), `None` when unknown
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// `12:00:00.000 ERROR [target] message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}
