use log::{
    max_level, set_logger, set_max_level, LevelFilter, Log, Metadata, Record,
};

struct Logger;
static GLOBAL_LOG: Logger = Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("% [{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Warnings only by default, each `-v` one level more.
pub fn level(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn start_logging(verbosity: u64) {
    let _ = set_logger(&GLOBAL_LOG);
    set_max_level(level(verbosity));
}
