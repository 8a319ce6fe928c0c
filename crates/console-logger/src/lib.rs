//! Console Logger
//!
//! A `log` backend for browser code. Records go to the matching
//! `console.*` method on wasm32 and to stderr everywhere else.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that forwards `log` records to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

/// Render a record as `LEVEL target: message`
pub fn format_record(record: &Record) -> String {
    format!("{} {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use web_sys::console;

    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&msg),
        Level::Warn => console::warn_1(&msg),
        Level::Info => console::info_1(&msg),
        Level::Debug | Level::Trace => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger as the global `log` backend
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
