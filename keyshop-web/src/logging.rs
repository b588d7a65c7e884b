//! `log` backend writing to the browser console.
//!
//! Core code logs through the `log` facade; in the browser those records go
//! to `console.error` / `console.warn` / `console.info` / `console.debug`.
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// Render a record the way it appears in the console.
#[must_use]
pub fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{level} {target}] {message}")
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    let logger = Box::new(ConsoleLogger::new(level));
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
