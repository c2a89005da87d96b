use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use matgen_core::config::{load_generator_config, GeneratorConfig};

/// Resolve the run configuration: built-in defaults, then the optional JSON
/// config file, then command line overrides.
pub fn config_from_arguments(matches: &ArgMatches) -> Result<GeneratorConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[matgen] Loading config: {:?}", config_path);
            load_generator_config(config_path)?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(output_dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = output_dir.clone();
    }

    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }

    Ok(config)
}
