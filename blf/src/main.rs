use std::fs;

use anyhow::{Context, Result};
use blf::config::BLFConfig;
use blf::io::cli::Cli;
use blf::io::output::BLFOutput;
use blf::opt::blf_optimizer::BLFOptimizer;
use blf::{EPOCH, io};
use clap::Parser as ClapParser;
use log::{info, warn};
use sheetnest::io::export::export;
use sheetnest::io::import::import;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BLFConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed BLFConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file: {}", args.input_file.display()))?;

    fs::create_dir_all(&args.solution_folder).with_context(|| {
        format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        )
    })?;

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import(&ext_instance)
        .with_context(|| format!("invalid instance: {}", ext_instance.name))?;

    let result = BLFOptimizer::new(instance.clone(), config)?.solve();

    let solution = export(
        &instance,
        &result,
        config.separation.kerf_width,
        ext_instance.cost_model.as_ref(),
        *EPOCH,
    );
    let output = BLFOutput {
        instance: ext_instance,
        solution,
        config,
    };

    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
