use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::Severity;

/// An output backend.
///
/// A provider is built fresh by its factory, initialized once with an opaque
/// configuration string, written to any number of times and destroyed once.
pub trait Provider: Send {
    /// Apply the provider-specific configuration.
    fn init(&mut self, config: &str) -> std::io::Result<()>;

    /// Write one message. `msg` already carries the severity tag and, when
    /// enabled, the call-site tag.
    fn write(&mut self, when: DateTime<Utc>, msg: &str, severity: Severity) -> std::io::Result<()>;

    /// Release anything the provider holds.
    fn destroy(&mut self);
}

/// Zero-argument constructor producing a fresh provider.
pub type ProviderFactory = Arc<dyn Fn() -> Box<dyn Provider> + Send + Sync>;

/// Wrap a constructor into a [`ProviderFactory`].
pub fn factory<F, P>(f: F) -> ProviderFactory
where
    F: Fn() -> P + Send + Sync + 'static,
    P: Provider + 'static,
{
    Arc::new(move || Box::new(f()) as Box<dyn Provider>)
}

/// Render the line shared by the bundled providers.
pub fn format_line(when: DateTime<Utc>, label: &str, msg: &str) -> String {
    let time = when.format("%Y-%m-%dT%H:%M:%S%.3f");
    format!("[{time} {label}] {msg}")
}

#[test]
fn test_format_line() {
    let when = DateTime::parse_from_rfc3339("2024-05-01T12:30:45.123Z")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(
        format_line(when, "ERROR", "[main.rs:3][E] boom"),
        "[2024-05-01T12:30:45.123 ERROR] [main.rs:3][E] boom"
    );
}
