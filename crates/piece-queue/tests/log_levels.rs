//! Log output of a session at the binary's default level.
//!
//! Installs a process-wide logger, so it lives in its own test binary.

use log::{Level, Log, Metadata, Record};
use piece_queue::logging::DEFAULT_LEVEL;
use piece_queue::session::{QUEUE_EMPTY_MESSAGE, QUEUE_FULL_MESSAGE};
use piece_queue::{Session, SessionConfig};
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_routine_rejections_stay_quiet_at_default_level() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(DEFAULT_LEVEL);

    let config = SessionConfig::default().with_seed(11);
    let mut session = Session::new(config).unwrap();

    // Insert into the full queue, then play past empty
    let script = "2\n1\n1\n1\n1\n1\n1\n0\n";
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output).unwrap();

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains(QUEUE_FULL_MESSAGE));
    assert!(out.contains(QUEUE_EMPTY_MESSAGE));

    let records = LOGGER.records.lock().unwrap();
    assert!(
        records.is_empty(),
        "unexpected log output at {DEFAULT_LEVEL}: {records:?}"
    );
}
