use std::env;
use std::fs;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blfit::core::builder::{BASE_ENV, ProcessBuilder};
use blfit::core::params::FitParams;
use blfit::error::{Error, Result};

use super::args::CliArgs;

/// Assemble the process described by `args`, print the operator dump to
/// stdout, and write the JSON job description when `--emit` is given.
///
/// The engine installation root comes from the environment here, at the
/// outermost layer; everything below receives it as an explicit value.
pub fn run(args: CliArgs) -> Result<()> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let base_dir = env::var(BASE_ENV).map_err(|_| Error::MissingEnv { var: BASE_ENV })?;

    let params = FitParams {
        xmin: args.xmin,
        min_stats: args.min_stats,
        n_points: args.n_points,
        rebin: args.rebin,
        hybrids: args.hybrid,
        noisy: args.noisy,
        dead_rms: args.dead_rms,
    };

    // Run-number selection: without an explicit input, fall back to the
    // conventional per-run histogram file name.
    let input = args
        .in_file
        .or_else(|| args.run.map(|run| format!("hps_run{run}.root")));

    let output_dir = match args.folder {
        Some(folder) => args.out_dir.join(folder),
        None => args.out_dir,
    };

    let mut builder = ProcessBuilder::new(base_dir, params).output_dir(output_dir);
    match input {
        Some(input) => {
            info!("input file: {}", input);
            builder = builder.input_file(input);
        }
        None => warn!("no input file or run number given; the engine receives empty file lists"),
    }
    if let Some(output) = args.out_file {
        builder = builder.output_file(output);
    }

    let process = builder.build()?;

    for output in &process.output_files {
        info!("output file: {}", output);
    }

    print!("{process}");

    if let Some(path) = args.emit {
        fs::write(&path, serde_json::to_string_pretty(&process)?)?;
        info!("wrote job description to {}", path.display());
    }

    Ok(())
}
