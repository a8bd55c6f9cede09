//! dvpl-cli
//!
//! Thin front end over dvpl-core: parse arguments once into a `DvplConfig`,
//! map the input file, run the codec, write the result.

pub mod cli;
pub mod io;
pub mod logging;
pub mod paths;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use dvpl_core::container::{inspect, DvplConfig, Operation};
use dvpl_core::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

pub use cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Pack { file, method, output } => {
            let output = output.unwrap_or_else(|| paths::packed_path(&file));
            convert(&file, &output, DvplConfig::pack(method), cli.stats)
        }
        Commands::Unpack { file, output } => {
            let output = output.unwrap_or_else(|| paths::unpacked_path(&file));
            convert(&file, &output, DvplConfig::unpack(), cli.stats)
        }
        Commands::Info { file } => print_info(&file),
    }
}

fn convert(input: &Path, output: &Path, config: DvplConfig, stats: bool) -> Result<()> {
    if paths::same_file(input, output) {
        bail!("output path {} is the input file", output.display());
    }
    let verb = match config.operation {
        Operation::Pack(_) => "pack",
        Operation::Unpack => "unpack",
    };

    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new();

    let data = timer
        .time(Stage::Read, || io::read_input(input))
        .with_context(|| format!("failed to read {}", input.display()))?;
    let result = config
        .apply_with_telemetry(&data, &mut counters, &mut timer)
        .with_context(|| format!("failed to {verb} {}", input.display()))?;
    drop(data);

    timer
        .time(Stage::Write, || io::write_output(output, &result))
        .with_context(|| format!("failed to write {}", output.display()))?;
    timer.finish();

    info!(
        input = %input.display(),
        output = %output.display(),
        bytes_out = result.len(),
        elapsed_us = timer.elapsed().as_micros() as u64,
        "{verb} done"
    );

    if stats {
        let snapshot = TelemetrySnapshot::from(&counters, &timer);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn print_info(file: &Path) -> Result<()> {
    let data = io::read_input(file).with_context(|| format!("failed to read {}", file.display()))?;
    let info = inspect(&data).with_context(|| format!("invalid container {}", file.display()))?;
    let t = info.trailer;

    println!("file:          {}", file.display());
    println!("method:        {} ({})", info.method_name(), t.method);
    println!("supported:     {}", if info.is_supported() { "yes" } else { "no" });
    println!("original size: {}", t.original_len);
    println!("packed size:   {}", t.packed_len);
    println!("checksum:      0x{:08x}", t.checksum);
    println!("ratio:         {:.3}", info.ratio());
    Ok(())
}
