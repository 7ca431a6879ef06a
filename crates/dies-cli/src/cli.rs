use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

use crate::commands::{chip_target::chip_target, default_settings::print_default_settings};

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Find the indirect chip-and-chase target for a frame stored as JSON.
    #[clap(name = "chip-target")]
    ChipTarget {
        /// Path to a JSON encoded `TeamFrame`
        #[clap(long)]
        frame: PathBuf,
    },

    /// Print the default chip settings as JSON.
    #[clap(name = "default-settings")]
    DefaultSettings,
}

#[derive(Debug, Parser)]
#[command(name = "dies-cli")]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(long, short = 'f', default_value = "dies-chip-settings.json")]
    pub settings_file: PathBuf,

    #[clap(long, default_value = "info")]
    pub log_level: String,

    #[clap(long, default_value = "auto")]
    pub log_file: String,
}

impl Cli {
    pub fn start(self) -> ExitCode {
        match self.command {
            Command::ChipTarget { frame } => match chip_target(&self.settings_file, &frame) {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    tracing::error!("Error evaluating chip target: {:#}", err);
                    ExitCode::FAILURE
                }
            },
            Command::DefaultSettings => match print_default_settings() {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    tracing::error!("Error printing settings: {:#}", err);
                    ExitCode::FAILURE
                }
            },
        }
    }
}
