//! Command handlers

use std::path::PathBuf;

use decorcost_app::app::{catalog_repository, estimate_from_vision_file, EstimationOptions};
use decorcost_app::config::Config;
use decorcost_domain::resolve_catalog_key;
use decorcost_types::{OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::{output_catalog, output_estimate, output_resolutions};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Estimate { vision, output } => {
            cmd_estimate(&config, vision, cli.catalog, output, output_format)
        }

        Commands::Resolve { names } => cmd_resolve(&config, cli.catalog, &names, output_format),

        Commands::Catalog => cmd_catalog(&config, cli.catalog, output_format),

        Commands::Config {
            show,
            set_catalog,
            clear_catalog,
            set_output,
            set_currency,
            reset,
        } => cmd_config(show, set_catalog, clear_catalog, set_output, set_currency, reset),
    }
}

fn cmd_estimate(
    config: &Config,
    vision: PathBuf,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut options = EstimationOptions::new();
    if let Some(path) = catalog {
        options = options.with_catalog(path);
    }
    if let Some(ref path) = output {
        options = options.with_output(path.clone());
    }

    debug!(vision = %vision.display(), "reading vision output");
    let outcome = estimate_from_vision_file(&vision, config, &options)?;
    output_estimate(output_format, &outcome, &config.currency)?;

    if let Some(path) = output {
        eprintln!("Results saved to: {}", path.display());
    }
    Ok(())
}

fn cmd_resolve(
    config: &Config,
    catalog: Option<PathBuf>,
    names: &[String],
    output_format: OutputFormat,
) -> Result<()> {
    let catalog = catalog_repository(config, catalog.as_deref()).load();
    let resolutions: Vec<_> = names
        .iter()
        .map(|name| {
            let key = resolve_catalog_key(name);
            let priced = key.is_some_and(|k| catalog.contains(k));
            (name.as_str(), key, priced)
        })
        .collect();

    output_resolutions(output_format, &resolutions)
}

fn cmd_catalog(config: &Config, catalog: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let repo = catalog_repository(config, catalog.as_deref());
    let catalog = repo.load();
    output_catalog(output_format, &repo.describe(), &catalog, &config.currency)
}

fn cmd_config(
    show: bool,
    set_catalog: Option<PathBuf>,
    clear_catalog: bool,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_catalog {
        config.catalog_path = Some(path);
        modified = true;
    }

    if clear_catalog {
        config.catalog_path = None;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
