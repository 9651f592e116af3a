use crate::cli::Cli;
use crate::config::PartialPatchConfig;
use crate::error::Result;
use hampatch::workflows;
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    let partial_config = PartialPatchConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args)?;

    info!("Invoking the replacement workflow...");
    let result = workflows::replace::run(&args.source, &args.replacement, &config)?;

    info!(
        "Workflow finished: {} tile(s), {} coupling pair(s) replaced.",
        result.report.tiles, result.report.sites
    );
    println!(
        "✓ Replaced {} coupling pair(s) in {} tile(s) of the {}x{} matrix.",
        result.report.sites, result.report.tiles, result.report.dimension, result.report.dimension
    );
    println!("✓ Patched matrix written to: {}", result.output_path.display());

    Ok(())
}
