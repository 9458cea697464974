//! `log` backend that writes to the host console.
//!
//! Records are formatted and queued as they are emitted; the runner flushes
//! the queue to [`Host::console_log`] at the end of every callback, since the
//! console is only reachable while the host is calling into the plugin.

use std::cell::RefCell;
use std::collections::VecDeque;

use air_roll_trainer::Host;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Oldest lines are dropped beyond this many unflushed lines.
pub const MAX_PENDING_LINES: usize = 256;

thread_local! {
    // Host callbacks arrive on one thread; lines wait there until flushed.
    static PENDING: RefCell<VecDeque<String>> = RefCell::new(VecDeque::new());
}

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    pub fn push(&self, line: String) {
        PENDING.with(|pending| {
            let mut lines = pending.borrow_mut();
            if lines.len() == MAX_PENDING_LINES {
                lines.pop_front();
            }
            lines.push_back(line);
        });
    }

    pub fn drain(&self) -> Vec<String> {
        PENDING.with(|pending| pending.borrow_mut().drain(..).collect())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.push(format(record));
        }
    }

    fn flush(&self) {}
}

/// `LEVEL module: message`, level right-aligned to five columns.
pub fn format(record: &Record<'_>) -> String {
    match record.module_path() {
        Some(module) => format!("{:>5} {}: {}", record.level(), module, record.args()),
        None => format!("{:>5} {}", record.level(), record.args()),
    }
}

/// Install the console logger and route panics through it.
/// Fails if another logger is already installed.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level.to_level_filter());
    std::panic::set_hook(Box::new(|info| log::error!("panic: {info}")));
    Ok(())
}

/// Write every queued line to the host console.
pub fn flush_to(host: &mut dyn Host) {
    for line in LOGGER.drain() {
        host.console_log(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_level_and_module() {
        let line = format(
            &Record::builder()
                .level(Level::Info)
                .module_path(Some("air_roll_trainer::core::speed"))
                .args(format_args!("game speed slowed to 0.6"))
                .build(),
        );
        assert_eq!(line, " INFO air_roll_trainer::core::speed: game speed slowed to 0.6");

        let line = format(&Record::builder().level(Level::Warn).args(format_args!("x")).build());
        assert_eq!(line, " WARN x");
    }

    #[test]
    fn queue_is_bounded() {
        let logger = ConsoleLogger;
        logger.drain();
        for i in 0..MAX_PENDING_LINES + 3 {
            logger.push(i.to_string());
        }
        let lines = logger.drain();
        assert_eq!(lines.len(), MAX_PENDING_LINES);
        assert_eq!(lines[0], "3");
        assert!(logger.drain().is_empty());
    }
}
