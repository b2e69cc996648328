use std::collections::HashMap;

use crate::{Error, ProviderFactory, Result};

/// Name-to-factory mapping for providers.
///
/// Build one during startup, register every provider once, then hand it to
/// the dispatcher constructors.
#[derive(Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`.
    ///
    /// # Panics
    /// When `name` is empty or already registered. Both are wiring bugs, use
    /// [`ProviderRegistry::try_register`] to handle them instead.
    pub fn register(&mut self, name: &str, factory: ProviderFactory) {
        if let Err(e) = self.try_register(name, factory) {
            panic!("{e}");
        }
    }

    pub fn try_register(&mut self, name: &str, factory: ProviderFactory) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyProviderName);
        }
        if self.factories.contains_key(name) {
            return Err(Error::RegistrationConflict { name: name.into() });
        }
        self.factories.insert(name.into(), factory);
        Ok(())
    }

    /// The factory registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<ProviderFactory> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound { name: name.into() })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::{Provider, Severity, factory};

    struct Null;

    impl Provider for Null {
        fn init(&mut self, _: &str) -> std::io::Result<()> {
            Ok(())
        }
        fn write(&mut self, _: DateTime<Utc>, _: &str, _: Severity) -> std::io::Result<()> {
            Ok(())
        }
        fn destroy(&mut self) {}
    }

    #[test]
    fn test_lookup_returns_same_factory() {
        let mut registry = ProviderRegistry::new();
        let f = factory(|| Null);
        registry.register("null", f.clone());
        let first = registry.lookup("null").unwrap();
        let second = registry.lookup("null").unwrap();
        assert!(Arc::ptr_eq(&first, &f));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_duplicate_registration_conflicts() {
        let mut registry = ProviderRegistry::new();
        let f = factory(|| Null);
        registry.try_register("null", f.clone()).unwrap();
        let err = registry.try_register("null", f).unwrap_err();
        assert!(matches!(err, Error::RegistrationConflict { ref name } if name == "null"));
        let err = registry.try_register("null", factory(|| Null)).unwrap_err();
        assert!(matches!(err, Error::RegistrationConflict { .. }));
    }

    #[test]
    #[should_panic(expected = "register called twice for provider \"null\"")]
    fn test_register_panics_on_duplicate() {
        let mut registry = ProviderRegistry::new();
        registry.register("null", factory(|| Null));
        registry.register("null", factory(|| Null));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = ProviderRegistry::new();
        assert!(matches!(
            registry.try_register("", factory(|| Null)),
            Err(Error::EmptyProviderName)
        ));
    }

    #[test]
    fn test_unknown_provider() {
        let registry = ProviderRegistry::new();
        let err = registry.lookup("nope").err().unwrap();
        assert!(matches!(err, Error::ProviderNotFound { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = ProviderRegistry::new();
        registry.register("zeta", factory(|| Null));
        registry.register("alpha", factory(|| Null));
        assert_eq!(registry.names(), ["alpha", "zeta"]);
        assert!(registry.contains("zeta"));
        assert!(!registry.contains("beta"));
    }
}
