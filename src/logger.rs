use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level(env!("CARGO_PKG_NAME"), level)
        .without_timestamps()
        .init()?;

    Ok(())
}
