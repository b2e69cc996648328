use std::fmt;

/// Syslog-style message severity.
///
/// The numeric rank follows RFC 5424: a lower rank is more urgent, so
/// `Severity::Emergency < Severity::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Severity {
    /// All severities, most urgent first.
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// One-letter tag used as the `[X] ` message prefix.
    pub fn tag(self) -> char {
        match self {
            Severity::Emergency => 'M',
            Severity::Alert => 'A',
            Severity::Critical => 'C',
            Severity::Error => 'E',
            Severity::Warning => 'W',
            Severity::Notice => 'N',
            Severity::Info => 'I',
            Severity::Debug => 'D',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Whether a message at this severity passes a `threshold`.
    pub fn passes(self, threshold: Severity) -> bool {
        self <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank outside `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid severity rank {0}, expected 0..=7")]
pub struct InvalidSeverity(pub u8);

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(rank: u8) -> Result<Self, InvalidSeverity> {
        Severity::ALL
            .get(rank as usize)
            .copied()
            .ok_or(InvalidSeverity(rank))
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
                log::LevelFilter::Error
            }
            Severity::Warning => log::LevelFilter::Warn,
            Severity::Notice | Severity::Info => log::LevelFilter::Info,
            Severity::Debug => log::LevelFilter::Trace,
        }
    }
}
