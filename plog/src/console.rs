use std::io::{self, Write};

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use plog_core::{Provider, Severity, format_line};
use serde::Deserialize;

/// Provider writing one colored line per message to stdout.
///
/// The configuration is never rejected. A JSON object with an integer
/// `level` (e.g. `{"level": 4}`) sets the provider's own threshold,
/// anything else is ignored.
pub struct ConsoleProvider {
    out: Box<dyn Write + Send>,
    level: Severity,
}

#[derive(Deserialize)]
struct ConsoleConfig {
    level: Option<u8>,
}

impl Default for ConsoleProvider {
    fn default() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl ConsoleProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console provider writing to `out` instead of stdout.
    pub fn with_writer<W: Write + Send + 'static>(out: W) -> Self {
        Self {
            out: Box::new(out),
            level: Severity::Debug,
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }
}

fn colored_label(severity: Severity) -> ColoredString {
    let label = severity.label();
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical => label.red().bold(),
        Severity::Error => label.red(),
        Severity::Warning => label.yellow(),
        Severity::Notice => label.cyan(),
        Severity::Info => label.green(),
        Severity::Debug => label.blue(),
    }
}

impl Provider for ConsoleProvider {
    fn init(&mut self, config: &str) -> io::Result<()> {
        if let Ok(ConsoleConfig { level: Some(rank) }) = serde_json::from_str(config)
            && let Ok(level) = Severity::try_from(rank)
        {
            self.level = level;
        }
        Ok(())
    }

    fn write(&mut self, when: DateTime<Utc>, msg: &str, severity: Severity) -> io::Result<()> {
        if !severity.passes(self.level) {
            return Ok(());
        }
        let label = colored_label(severity).to_string();
        let mut line = format_line(when, &label, msg);
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    fn destroy(&mut self) {
        self.out.flush().ok();
    }
}
