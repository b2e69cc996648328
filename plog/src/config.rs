use std::sync::LazyLock;

use derive_from_env::FromEnv;
use plog_core::Severity;

#[derive(FromEnv)]
#[from_env(prefix = "PLOG")]
#[allow(non_snake_case)]
struct LevelVar {
    #[from_env(default = "7")]
    LEVEL: u8,
}

#[derive(FromEnv)]
#[from_env(prefix = "PLOG")]
#[allow(non_snake_case)]
struct CallSiteVar {
    #[from_env(default = "true")]
    CALL_SITE: bool,
}

/// Dispatcher defaults, read once from `PLOG_*` environment variables.
///
/// Each variable is parsed on its own: an unparseable one falls back to its
/// default without affecting the other.
#[allow(non_snake_case)]
pub struct PLogConfig {
    /// Minimum severity rank forwarded to providers (0 = emergency, 7 = debug).
    pub LEVEL: u8,
    /// Whether messages are tagged with `[file:line]`.
    pub CALL_SITE: bool,
}

impl Default for PLogConfig {
    fn default() -> Self {
        Self {
            LEVEL: Severity::Debug.rank(),
            CALL_SITE: true,
        }
    }
}

impl PLogConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            LEVEL: LevelVar::from_env().map_or(defaults.LEVEL, |var| var.LEVEL),
            CALL_SITE: CallSiteVar::from_env().map_or(defaults.CALL_SITE, |var| var.CALL_SITE),
        }
    }

    /// Configured threshold; ranks above 7 clamp to debug.
    pub fn level(&self) -> Severity {
        Severity::try_from(self.LEVEL).unwrap_or(Severity::Debug)
    }
}

pub static PLOG_CONFIG: LazyLock<PLogConfig> = LazyLock::new(PLogConfig::from_env);

#[test]
fn test_level_clamps() {
    let config = PLogConfig {
        LEVEL: 42,
        CALL_SITE: true,
    };
    assert_eq!(config.level(), Severity::Debug);
    let config = PLogConfig {
        LEVEL: 4,
        ..PLogConfig::default()
    };
    assert_eq!(config.level(), Severity::Warning);
}

#[test]
fn test_env_vars_parse_independently() {
    LazyLock::force(&PLOG_CONFIG);
    // SAFETY: PLOG_CONFIG is forced above, nothing else in this crate reads PLOG_* variables.
    unsafe {
        std::env::set_var("PLOG_LEVEL", "-1");
        std::env::set_var("PLOG_CALL_SITE", "false");
    }
    let config = PLogConfig::from_env();
    assert_eq!(config.LEVEL, 7);
    assert!(!config.CALL_SITE);

    unsafe {
        std::env::set_var("PLOG_LEVEL", "4");
        std::env::set_var("PLOG_CALL_SITE", "maybe");
    }
    let config = PLogConfig::from_env();
    assert_eq!(config.level(), Severity::Warning);
    assert!(config.CALL_SITE);

    unsafe {
        std::env::remove_var("PLOG_LEVEL");
        std::env::remove_var("PLOG_CALL_SITE");
    }
}
