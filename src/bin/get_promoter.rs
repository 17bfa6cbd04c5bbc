use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, info};
use promoter_fetch::{cli::Args, config::PromoterConfig, ensembl::EnsemblClient, pipeline};
use simple_logger::init_with_level;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_with_level(Level::Info) {
        eprintln!("Could not initialise logging: {e}");
    }
    info!("Starting get_promoter with {args}");

    let config = PromoterConfig::default();
    let genes = args.gene_names()?;
    let client = EnsemblClient::new(&config.server)
        .with_context(|| format!("Could not set up a client for {}", config.server))?;
    pipeline::run(&client, args.species, &genes, &config.output_paths())
        .context("Promoter run aborted")?;
    Ok(())
}
