#![doc = include_str!("../README.md")]

mod cli;

use clap::{Parser, crate_version};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Front(args) => cli::front(&args)?,
        Command::Classify(args) => cli::classify(&args)?,
    }

    info!("done!");
    Ok(())
}
