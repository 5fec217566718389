use std::cell::RefCell;
use std::sync::Once;

use log::{Level, Log, Metadata, Record};

/// Collects the log records of the current test thread.
struct CapturingLogger;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT: Once = Once::new();

/// Run `f` and return its result together with the records it logged on this thread.
pub fn capture_logs<F, R>(f: F) -> (R, Vec<(Level, String)>)
where
    F: FnOnce() -> R,
{
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("Unable to install capturing logger.");
        log::set_max_level(log::LevelFilter::Trace);
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    let result = f();
    let logged = RECORDS.with(|records| records.borrow_mut().drain(..).collect());

    (result, logged)
}
