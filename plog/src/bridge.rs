use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::{Log, Metadata, Record, SetLoggerError};
use plog_core::{Result, Severity};

use crate::{CallSite, Dispatcher};

/// Adapter exposing a [`Dispatcher`] as a [`log::Log`] implementation.
///
/// `log::Level::Trace` and `log::Level::Debug` both map to [`Severity::Debug`];
/// the call site comes from the record's `file()`/`line()`.
pub struct LogBridge {
    dispatcher: Mutex<Dispatcher>,
}

impl LogBridge {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Mutex::new(dispatcher),
        }
    }

    fn dispatcher(&self) -> MutexGuard<'_, Dispatcher> {
        self.dispatcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Shut the wrapped dispatcher down. Later records are reported as dropped.
    pub fn shutdown(&self) -> Result<()> {
        self.dispatcher().shutdown()
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Severity::from(metadata.level()).passes(self.dispatcher().level())
    }

    fn log(&self, record: &Record) {
        let site = record
            .file()
            .zip(record.line())
            .map(|(file, line)| CallSite { file, line });
        self.dispatcher()
            .log_at(record.level().into(), site, *record.args());
    }

    fn flush(&self) {}
}

static GLOBAL_BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Install `dispatcher` as the global `log` logger.
///
/// Fails when another logger is already installed; the rejected dispatcher's
/// provider is destroyed before returning. The bridge lives for the rest of
/// the process, keep the returned reference to shut it down.
pub fn init_global(
    dispatcher: Dispatcher,
) -> std::result::Result<&'static LogBridge, SetLoggerError> {
    let level = dispatcher.level();
    let mut created = false;
    // When the cell is already set the closure is dropped unused, and the
    // dispatcher it captured with it.
    let bridge = GLOBAL_BRIDGE.get_or_init(|| {
        created = true;
        LogBridge::new(dispatcher)
    });
    if let Err(e) = log::set_logger(bridge) {
        if created {
            bridge.shutdown().ok();
        }
        return Err(e);
    }
    log::set_max_level(level.into());
    Ok(bridge)
}
