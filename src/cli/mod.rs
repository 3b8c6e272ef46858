use std::{fs, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use crate::{playlist::loader, report};

#[derive(Parser)]
#[command(name = "playlist-report")]
#[command(version = "0.1")]
#[command(about = "Analyzes a tab-delimited music playlist into a fixed text report")]
pub struct Cli {
    /// Path to the tab-delimited playlist file
    pub playlist: PathBuf,

    /// Path the text report is written to
    pub report: PathBuf,
}

/// Entrypoint for CLI
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // The report file is truncated before loading starts, whether or not
    // generation succeeds.
    if let Err(err) = fs::File::create(&cli.report)
        .with_context(|| format!("failed to create report file {}", cli.report.display()))
    {
        log::error!("{err:#}");
        process::exit(3);
    }

    let tracks = match loader::load(&cli.playlist) {
        Ok(tracks) => tracks,
        Err(err) => {
            log::error!("could not load playlist: {err}");
            process::exit(1);
        }
    };

    let output = report::render(&tracks);

    if let Err(err) = fs::write(&cli.report, &output)
        .with_context(|| format!("failed to write report to {}", cli.report.display()))
    {
        log::error!("{err:#}");
        process::exit(3);
    }

    println!("Report written to {}", cli.report.display());
}
