//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "rust-network-diagram",
    version,
    about = "Interactive activity-on-node network diagram for CPM/PERT projects.",
    long_about = None
)]
pub struct Cli {
    /// Project or analysis JSON to open on startup.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Logical canvas width; overrides the saved setting.
    #[arg(long, value_name = "PX")]
    pub width: Option<f32>,

    /// Logical canvas height; overrides the saved setting.
    #[arg(long, value_name = "PX")]
    pub height: Option<f32>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `NETWORK_DIAGRAM_LOG`, then the saved setting, then `info`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_and_overrides() {
        let cli = Cli::try_parse_from([
            "rust-network-diagram",
            "plan.json",
            "--width",
            "1600",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("plan.json")));
        assert_eq!(cli.width, Some(1600.0));
        assert_eq!(cli.height, None);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Cli::try_parse_from(["rust-network-diagram", "--log-level", "loud"]).is_err());
    }
}
