use clap::Parser;
use musen_check::check::registry::{check_addresses, report_stats};
use musen_check::utils::{logger, validation::Validate};
use musen_check::{CliConfig, HttpLicenseLookup, Reconciler, StationRegistry, TracingSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting musen-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {e}");
        std::process::exit(1);
    }

    let registry = StationRegistry::from_path(&config.stations)?;
    let mut sink = TracingSink;

    report_stats(&registry, &mut sink);
    check_addresses(&registry, &mut sink);

    if config.offline {
        tracing::info!("Offline mode, skipping license reconciliation");
        return Ok(());
    }

    let lookup = HttpLicenseLookup::new(config.endpoint.clone());
    let reconciler = Reconciler::new(lookup);
    reconciler.run(&registry, &mut sink).await;

    tracing::info!("License check completed");
    Ok(())
}
