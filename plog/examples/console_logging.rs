use plog::{Dispatcher, ProviderRegistry, Severity, register_builtin};

fn main() -> plog::Result<()> {
    let mut registry = ProviderRegistry::new();
    register_builtin(&mut registry);

    let mut logger = Dispatcher::new(&registry, "console", r#"{"level": 7}"#)?;
    let name = logger.provider_name().to_owned();
    plog::notice!(logger, "starting with provider {name}");
    for level in Severity::ALL {
        logger.log(level, format_args!("a {level} message"));
    }
    plog::error!(logger, "value={}", 42);

    let mut quiet = Dispatcher::new(&registry, "console", "")?.with_level(Severity::Warning);
    plog::info!(quiet, "never printed");
    plog::warning!(quiet, "printed");

    quiet.shutdown()?;
    logger.shutdown()?;
    Ok(())
}
