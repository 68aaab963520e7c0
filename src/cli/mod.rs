//! CLI module for Kizua Trends
//!
//! clap-based command surface with one struct per command. Each command
//! initializes its own logging mode (file-only for the TUI, console+file
//! for one-shot runs) before doing any work.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};

use commands::analyze::{AnalyzeArgs, AnalyzeCommand};
use commands::dashboard::{DashboardArgs, DashboardCommand};

#[derive(Parser)]
#[command(name = "kizua")]
#[command(version)]
#[command(about = "Market trend insights dashboard for Angola", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive trends dashboard
    Dashboard(DashboardArgs),

    /// Run one analysis and print the report to the console
    Analyze(AnalyzeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);
        data_paths.ensure_directories()?;

        match self.command {
            Commands::Dashboard(args) => DashboardCommand::new(args).execute(data_paths).await,
            Commands::Analyze(args) => AnalyzeCommand::new(args).execute(data_paths).await,
        }
    }
}
