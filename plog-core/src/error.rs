use thiserror::Error;

/// Errors raised while wiring providers and building or tearing down a dispatcher.
///
/// Per-message write failures are not represented here: they are reported on the
/// dispatcher's fallback channel and never returned from a log call.
#[derive(Debug, Error)]
pub enum Error {
    /// A provider name was registered twice.
    #[error("plog: register called twice for provider {name:?}")]
    RegistrationConflict { name: String },

    /// A provider was registered with an empty name.
    #[error("plog: provider name must not be empty")]
    EmptyProviderName,

    /// No factory is registered under the requested name.
    #[error("plog: unknown provider {name:?} (forgotten register?)")]
    ProviderNotFound { name: String },

    /// The provider rejected its configuration.
    #[error("plog: failed to initialize provider {name:?}: {source}")]
    ProviderInit {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The dispatcher's provider has already been destroyed.
    #[error("plog: provider {name:?} is already shut down")]
    ShutDown { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
