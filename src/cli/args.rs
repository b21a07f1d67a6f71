//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

use crate::domain::config::ConfigLayer;

/// cam-trigger - record a video clip whenever a command arrives on stdin
#[derive(Parser, Debug)]
#[command(name = "cam-trigger")]
#[command(version)]
#[command(about = "Record a video clip each time 'save' is typed on stdin")]
#[command(
    after_help = "Commands on STDIN: save [ms] | status | quit\n\nDefaults:\n  --duration 10000\n  --outdir /mnt/ssd/clips\n  --min-gap 500"
)]
pub struct Cli {
    /// Default clip length in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: Option<u64>,

    /// Directory clips are written to
    #[arg(long, value_name = "PATH", env = "CAM_TRIGGER_OUTDIR")]
    pub outdir: Option<PathBuf>,

    /// Ignore triggers within this many milliseconds of the last accepted one
    #[arg(long, value_name = "MS")]
    pub min_gap: Option<u64>,

    /// Log gate decisions and recorder launches (can only turn logging on; a config file's `verbose = true` still applies without it)
    #[arg(long)]
    pub verbose: bool,

    /// Recorder executable
    #[arg(long, value_name = "PROGRAM", env = "CAM_TRIGGER_RECORDER")]
    pub recorder: Option<String>,

    /// Read settings from this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Settings given on the command line (or their env fallbacks)
    pub fn to_layer(&self) -> ConfigLayer {
        ConfigLayer {
            duration_ms: self.duration,
            outdir: self.outdir.clone(),
            min_gap_ms: self.min_gap,
            verbose: if self.verbose { Some(true) } else { None },
            recorder: self.recorder.clone(),
        }
    }
}
