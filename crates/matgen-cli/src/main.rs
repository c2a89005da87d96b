use anyhow::Result;
use log::LevelFilter;

use matgen_cli::cli::build_cli;
use matgen_cli::input::config_from_arguments;
use matgen_core::generator;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATGEN_LOG", "error"))
        .init();

    let matches = build_cli().get_matches();
    let config = config_from_arguments(&matches)?;

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    log::info!(
        "[matgen] Writing {} matrix files into {:?}",
        config.matrices.len(),
        config.output_dir
    );

    match generator::run(&config) {
        Ok(_) => {
            println!("Matrix files generated successfully!");
            Ok(())
        }
        Err(e) => {
            log::error!("Matrix generation failed: {:#}", e);
            Err(e)
        }
    }
}
