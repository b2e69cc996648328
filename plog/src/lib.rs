//! # plog
//! Pluggable logging facade with syslog-style severities.
//!
//! A [`Dispatcher`] owns one provider, built by name from a
//! [`ProviderRegistry`]. Each message is tagged with its severity and call
//! site, stamped with the current time and handed to the provider.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! plog = "0.1.0"
//! ```
//!
//! ```rust
//! use plog::{Dispatcher, ProviderRegistry, register_builtin};
//!
//! let mut registry = ProviderRegistry::new();
//! register_builtin(&mut registry);
//!
//! let mut logger = Dispatcher::new(&registry, "console", r#"{"level": 7}"#)?;
//! plog::info!(logger, "listening on port {}", 8080);
//! plog::error!(logger, "value={}", 42);
//! logger.shutdown()?;
//! # Ok::<(), plog::Error>(())
//! ```
//!
//! ## Custom providers
//! Anything implementing [`Provider`] can be registered under its own name.
//!
//! ```rust
//! use std::io;
//! use chrono::{DateTime, Utc};
//! use plog::{Dispatcher, Provider, ProviderRegistry, Severity, factory};
//!
//! #[derive(Default)]
//! struct Stderr;
//!
//! impl Provider for Stderr {
//!     fn init(&mut self, _config: &str) -> io::Result<()> {
//!         Ok(())
//!     }
//!     fn write(&mut self, _when: DateTime<Utc>, msg: &str, _: Severity) -> io::Result<()> {
//!         eprintln!("{msg}");
//!         Ok(())
//!     }
//!     fn destroy(&mut self) {}
//! }
//!
//! let mut registry = ProviderRegistry::new();
//! registry.register("stderr", factory(Stderr::default));
//! let mut logger = Dispatcher::new(&registry, "stderr", "")?;
//! plog::warning!(logger, "disk usage at {}%", 91);
//! # Ok::<(), plog::Error>(())
//! ```
//!
//! ## Routing the `log` crate
//! ```rust
//! use plog::{Dispatcher, ProviderRegistry, Severity, register_builtin};
//!
//! let mut registry = ProviderRegistry::new();
//! register_builtin(&mut registry);
//! let logger = Dispatcher::new(&registry, "console", "")?.with_level(Severity::Info);
//! let bridge = plog::init_global(logger).expect("a logger is already installed");
//! log::info!("Hello, world!");
//! bridge.shutdown()?;
//! # Ok::<(), plog::Error>(())
//! ```
//!
//! ## Environment
//! `PLOG_LEVEL` (0 = emergency ... 7 = debug) and `PLOG_CALL_SITE`
//! (`true`/`false`) set the defaults of every new dispatcher.

mod bridge;
mod config;
mod console;
mod dispatcher;
mod file;
#[cfg(test)]
mod testing;

pub use bridge::{LogBridge, init_global};
pub use config::{PLOG_CONFIG, PLogConfig};
pub use console::ConsoleProvider;
pub use dispatcher::{CallSite, Dispatcher};
pub use file::FileProvider;
pub use plog_core::{
    Error, InvalidSeverity, Provider, ProviderFactory, ProviderRegistry, Result, Severity,
    factory,
};

/// Register the bundled providers: `"console"` and `"file"`.
///
/// # Panics
/// When either name is already taken in `registry`.
pub fn register_builtin(registry: &mut ProviderRegistry) {
    registry.register("console", factory(ConsoleProvider::new));
    registry.register("file", factory(FileProvider::new));
}

#[macro_export]
macro_rules! emergency {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.emergency(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! alert {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.alert(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! critical {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.critical(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.error(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.warning(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! notice {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.notice(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.info(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($dispatcher:expr, $($arg:tt)+) => {
        $dispatcher.debug(::core::format_args!($($arg)+))
    };
}

#[test]
fn test_register_builtin() {
    let mut registry = ProviderRegistry::new();
    register_builtin(&mut registry);
    assert_eq!(registry.names(), ["console", "file"]);
    let mut logger = Dispatcher::new(&registry, "console", "").unwrap();
    assert_eq!(logger.provider_name(), "console");
    logger.shutdown().unwrap();
}

#[test]
#[should_panic(expected = "register called twice for provider \"console\"")]
fn test_register_builtin_twice() {
    let mut registry = ProviderRegistry::new();
    register_builtin(&mut registry);
    register_builtin(&mut registry);
}

#[test]
fn test_macros_ignore_local_format_args() {
    use crate::testing::{Record, Recorder};

    #[allow(unused_macros)]
    macro_rules! format_args {
        ($($arg:tt)*) => {
            ::core::panic!("local format_args used")
        };
    }

    let seen = Record::default();
    let mut registry = ProviderRegistry::new();
    let record = seen.clone();
    registry.register("recorder", factory(move || Recorder::new(&record)));
    let mut logger = Dispatcher::new(&registry, "recorder", "")
        .unwrap()
        .with_level(Severity::Debug)
        .with_call_site(false);
    crate::notice!(logger, "n={}", 1);
    crate::debug!(logger, "d={}", 2);
    assert_eq!(seen.messages(), ["[N] n=1", "[D] d=2"]);
}
