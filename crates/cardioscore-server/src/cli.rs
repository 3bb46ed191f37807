use crate::config::OutputMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardioscore")]
#[command(author, version, about = "Heart-disease prediction service")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the prediction server
    Start {
        /// Listen port
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Classifier artifact path
        #[arg(short, long, default_value = "models/heart_model.json")]
        model: PathBuf,

        /// Response shape: label or probability
        #[arg(short, long, default_value = "probability", value_parser = parse_output)]
        output: OutputMode,

        /// Decision threshold for the positive class
        #[arg(long, default_value = "0.5")]
        threshold: f64,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a classifier artifact and print its metadata
    Inspect {
        /// Classifier artifact path
        #[arg(short, long, default_value = "models/heart_model.json")]
        model: PathBuf,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

fn parse_output(s: &str) -> Result<OutputMode, String> {
    s.parse()
}
