use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use plog_core::{Provider, Severity, format_line};
use serde::Deserialize;

/// Provider appending one line per message to a file.
///
/// Configured with `{"path": "/var/log/app.log", "level": 6}`; `level` is
/// optional. The file is created if it does not exist and appended to if it does.
pub struct FileProvider {
    file: Option<BufWriter<File>>,
    level: Severity,
}

#[derive(Deserialize)]
struct FileConfig {
    path: PathBuf,
    level: Option<u8>,
}

impl Default for FileProvider {
    fn default() -> Self {
        Self {
            file: None,
            level: Severity::Debug,
        }
    }
}

impl FileProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Provider for FileProvider {
    fn init(&mut self, config: &str) -> io::Result<()> {
        let FileConfig { path, level } = serde_json::from_str(config)?;
        if let Some(rank) = level {
            self.level = Severity::try_from(rank)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        }
        let file = File::options().create(true).append(true).open(&path)?;
        self.file = Some(BufWriter::new(file));
        Ok(())
    }

    fn write(&mut self, when: DateTime<Utc>, msg: &str, severity: Severity) -> io::Result<()> {
        let file = self.file.as_mut().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "log file is not open")
        })?;
        if !severity.passes(self.level) {
            return Ok(());
        }
        writeln!(file, "{}", format_line(when, severity.label(), msg))?;
        file.flush()
    }

    fn destroy(&mut self) {
        if let Some(mut file) = self.file.take() {
            file.flush().ok();
        }
    }
}
