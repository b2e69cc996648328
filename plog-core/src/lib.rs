//! # plog-core
//! Core types for plog - severities, the provider contract and the provider registry.

mod error;
mod provider;
mod registry;
mod severity;

pub use error::{Error, Result};
pub use provider::{Provider, ProviderFactory, factory, format_line};
pub use registry::ProviderRegistry;
pub use severity::{InvalidSeverity, Severity};
