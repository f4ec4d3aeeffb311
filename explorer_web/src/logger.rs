use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Sends `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => console::error!(line),
            Level::Warn => console::warn!(line),
            Level::Info => console::info!(line),
            Level::Debug | Level::Trace => console::debug!(line),
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
