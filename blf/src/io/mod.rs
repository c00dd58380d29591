use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sheetnest::io::ext_repr::ExtInstance;

use crate::EPOCH;
use crate::config::BLFConfig;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    read_json(path).with_context(|| format!("could not read instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<BLFConfig> {
    read_json(path).context("incorrect config file format")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader)
        .with_context(|| format!("could not parse file: {}", path.display()))?;
    Ok(value)
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "solution written to {:?}",
        fs::canonicalize(path).context("could not canonicalize path")?
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] start: {:.0}", jiff::Timestamp::now());
    Ok(())
}
