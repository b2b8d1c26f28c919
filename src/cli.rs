use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::scaler::constants::AMOUNT_DEFAULT;
use crate::server::{ServerConfig, DEFAULT_BIND};

/// Portion scaler: rescale a food group's weights to a target portion.
#[derive(Parser, Debug)]
#[command(name = "portion-scaler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file with food records to use instead of the built-in sample.
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Log level when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the interactive page over HTTP.
    Serve {
        /// Address to bind.
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },

    /// Print one rescaled table.
    Show {
        /// Selected food; omit to get the placeholder.
        #[arg(short, long)]
        food: Option<String>,

        /// Target amount for the selected food (0-200, step 10).
        #[arg(short, long, default_value_t = AMOUNT_DEFAULT)]
        amount: f64,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Pick foods and amounts from terminal prompts.
    Interactive,

    /// List all foods by group.
    Foods,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            bind: ServerConfig::default().bind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["portion-scaler"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Serve { bind } if bind.port() == 8050));
    }

    #[test]
    fn test_show_args() {
        let cli = Cli::parse_from([
            "portion-scaler",
            "show",
            "--food",
            "Poha",
            "--amount",
            "200",
            "--format",
            "csv",
        ]);
        match cli.command {
            Some(Command::Show {
                food,
                amount,
                format,
            }) => {
                assert_eq!(food.as_deref(), Some("Poha"));
                assert_eq!(amount, 200.0);
                assert_eq!(format, OutputFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_data_flag() {
        let cli = Cli::parse_from(["portion-scaler", "foods", "--data", "foods.json"]);
        assert_eq!(cli.data, Some(PathBuf::from("foods.json")));
    }
}
