use std::{
    io::{self, Write},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::{DateTime, Utc};
use plog_core::{Provider, Severity};

/// In-memory writer whose contents stay readable after it is moved into a provider.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer counting the `write` calls it receives.
#[derive(Clone, Default)]
pub struct CountingWriter {
    buf: SharedBuf,
    writes: Arc<AtomicUsize>,
}

impl CountingWriter {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn contents(&self) -> String {
        self.buf.contents()
    }
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.buf.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Shared view of everything a [`Recorder`] saw.
#[derive(Clone, Default)]
pub struct Record {
    pub lines: Arc<Mutex<Vec<(Severity, String)>>>,
    pub inits: Arc<AtomicUsize>,
    pub destroys: Arc<AtomicUsize>,
}

impl Record {
    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().unwrap().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn destroys(&self) -> usize {
        self.destroys.load(Ordering::SeqCst)
    }
}

pub struct Recorder {
    pub record: Record,
    pub fail_init: bool,
    pub fail_write: bool,
}

impl Recorder {
    pub fn new(record: &Record) -> Self {
        Self {
            record: record.clone(),
            fail_init: false,
            fail_write: false,
        }
    }
}

impl Provider for Recorder {
    fn init(&mut self, config: &str) -> io::Result<()> {
        self.record.inits.fetch_add(1, Ordering::SeqCst);
        if self.fail_init {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("bad config {config:?}"),
            ));
        }
        Ok(())
    }

    fn write(&mut self, _: DateTime<Utc>, msg: &str, severity: Severity) -> io::Result<()> {
        if self.fail_write {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.record.lines.lock().unwrap().push((severity, msg.into()));
        Ok(())
    }

    fn destroy(&mut self) {
        self.record.destroys.fetch_add(1, Ordering::SeqCst);
    }
}
