use std::{
    fmt::{self, Write as _},
    io::Write,
    panic::Location,
    path::Path,
};

use chrono::Utc;
use plog_core::{Error, Provider, ProviderRegistry, Result, Severity};

use crate::config::PLOG_CONFIG;

/// Source location a message was logged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl CallSite<'static> {
    /// Placeholder used when the caller cannot be resolved.
    pub const UNKNOWN: CallSite<'static> = CallSite {
        file: "???",
        line: 0,
    };

    /// Location of the outermost `#[track_caller]` caller.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl<'a> CallSite<'a> {
    /// Last path component of `file`.
    pub fn filename(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.filename(), self.line)
    }
}

/// Logging handle owning one provider.
///
/// Messages are tagged with their severity and call site, stamped with the
/// current time and handed to the provider synchronously, in call order.
/// Write failures never reach the caller: they are reported on the fallback
/// channel (stderr unless replaced with [`Dispatcher::with_fallback`]).
pub struct Dispatcher {
    name: String,
    provider: Option<Box<dyn Provider>>,
    level: Severity,
    call_site: bool,
    fallback: Box<dyn Write + Send>,
}

impl Dispatcher {
    /// Build the provider registered as `provider_name` and initialize it with `config`.
    pub fn new(registry: &ProviderRegistry, provider_name: &str, config: &str) -> Result<Self> {
        let factory = registry.lookup(provider_name)?;
        let mut provider = factory();
        if let Err(source) = provider.init(config) {
            let err = Error::ProviderInit {
                name: provider_name.into(),
                source,
            };
            eprintln!("{err}");
            return Err(err);
        }
        Ok(Self {
            name: provider_name.into(),
            provider: Some(provider),
            level: PLOG_CONFIG.level(),
            call_site: PLOG_CONFIG.CALL_SITE,
            fallback: Box::new(std::io::stderr()),
        })
    }

    /// Sets the least urgent severity still forwarded.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables the `[file:line]` tag.
    pub fn with_call_site(mut self, yes: bool) -> Self {
        self.call_site = yes;
        self
    }

    /// Replaces the stream receiving write failures.
    pub fn with_fallback<W: Write + Send + 'static>(mut self, fallback: W) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn provider_name(&self) -> &str {
        &self.name
    }

    pub fn is_shut_down(&self) -> bool {
        self.provider.is_none()
    }

    #[track_caller]
    pub fn emergency(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Emergency, args)
    }

    #[track_caller]
    pub fn alert(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Alert, args)
    }

    #[track_caller]
    pub fn critical(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Critical, args)
    }

    #[track_caller]
    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args)
    }

    #[track_caller]
    pub fn warning(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args)
    }

    #[track_caller]
    pub fn notice(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Notice, args)
    }

    #[track_caller]
    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args)
    }

    #[track_caller]
    pub fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args)
    }

    /// Log at `severity`, tagging the message with the caller's location.
    #[track_caller]
    pub fn log(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log_at(severity, Some(CallSite::caller()), args)
    }

    /// Log at `severity` from an explicit call site. `None` is tagged `[???:0]`.
    pub fn log_at(
        &mut self,
        severity: Severity,
        site: Option<CallSite<'_>>,
        args: fmt::Arguments<'_>,
    ) {
        if !severity.passes(self.level) {
            return;
        }
        let Some(provider) = self.provider.as_mut() else {
            writeln!(
                self.fallback,
                "plog: dropped {severity} message, provider {:?} is already shut down",
                self.name
            )
            .ok();
            return;
        };
        let mut msg = String::new();
        if self.call_site {
            write!(msg, "{}", site.unwrap_or(CallSite::UNKNOWN)).ok();
        }
        write!(msg, "[{}] {args}", severity.tag()).ok();
        if let Err(e) = provider.write(Utc::now(), &msg, severity) {
            writeln!(
                self.fallback,
                "plog: unable to write message to provider {:?}: {e}",
                self.name
            )
            .ok();
        }
    }

    /// Destroy the provider. Fails with [`Error::ShutDown`] when called again.
    pub fn shutdown(&mut self) -> Result<()> {
        let mut provider = self.provider.take().ok_or_else(|| Error::ShutDown {
            name: self.name.clone(),
        })?;
        provider.destroy();
        Ok(())
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        if let Some(mut provider) = self.provider.take() {
            provider.destroy();
        }
    }
}
