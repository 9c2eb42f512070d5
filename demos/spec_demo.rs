use prodcat::{print_specs, CatalogConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let config = CatalogConfig::demonstration_from_env();
    log::debug!("Querying {} models ({:?})", config.models.len(), config.concurrency_mode);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_specs(&mut out, &config)?;
    Ok(())
}
