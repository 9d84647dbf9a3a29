use log::{LevelFilter, Log, Metadata, Record};
use vexide::prelude::*;

/// Sends `log` records to the brain's serial console.
struct BrainLogger;

static LOGGER: BrainLogger = BrainLogger;

impl Log for BrainLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
