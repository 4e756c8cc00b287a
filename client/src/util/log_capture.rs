//! In-memory `log` sink for tests.
//!
//! The logger is process-global, so tests share it. Filter by a string only
//! your test logs.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { lines: Mutex::new(Vec::new()) };
static INSTALL: Once = Once::new();

pub(crate) fn install() {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Captured `(level, message)` pairs whose message contains `needle`.
pub(crate) fn lines_mentioning(needle: &str) -> Vec<(Level, String)> {
    CAPTURE
        .lines
        .lock()
        .map(|lines| lines.iter().filter(|(_, msg)| msg.contains(needle)).cloned().collect())
        .unwrap_or_default()
}
