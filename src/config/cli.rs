use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ui-utils")]
#[command(about = "Linkify text into rich-text markup and sample from interval unions")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rewrite the URIs of a text as anchors and image previews
    Linkify {
        /// Text to rewrite; read from stdin when absent
        text: Option<String>,

        #[arg(long)]
        images_width: Option<u32>,

        #[arg(long)]
        images_height: Option<u32>,
    },

    /// Draw random values from a union of intervals
    Sample {
        /// Interval as LOW:HIGH, repeatable, in ascending order
        #[arg(short, long = "interval", value_parser = parse_interval)]
        intervals: Vec<(f64, f64)>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(short = 'n', long)]
        count: Option<u64>,

        #[arg(long, help = "Print the values as a JSON array")]
        json: bool,
    },
}

/// `"1.5:4"` -> `(1.5, 4.0)`
pub fn parse_interval(value: &str) -> Result<(f64, f64), String> {
    let (low, high) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LOW:HIGH, got '{}'", value))?;

    let low = low
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid low bound '{}': {}", low, e))?;
    let high = high
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid high bound '{}': {}", high, e))?;

    Ok((low, high))
}
