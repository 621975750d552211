use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rotqr",
    about = "rotqr — rotate a matrix 90° counter-clockwise and QR-factorize it",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct RotqrCli {
    /// Global: path to config (TOML); default: ~/.rotqr/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: trace dimensions and timings on stderr (same as ROTQR_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: report failures as {"error": .., "kind": ..} JSON on stderr
    #[arg(long = "json-errors", action = ArgAction::SetTrue, global = true)]
    pub json_errors: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rotate then QR-factorize a {"data": [[..]]} payload
    ///
    /// Examples:
    ///   echo '{"data": [[1,2],[3,4]]}' | rotqr qr
    ///   rotqr qr input.json -o out.json --stats
    Qr {
        /// Input JSON file; stdin when omitted or "-"
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output file path (written atomically); stdout when omitted
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long = "pretty", action = ArgAction::SetTrue)]
        pretty: bool,

        /// Check Q·R and QᵗQ against the configured tolerance
        #[arg(long = "verify", action = ArgAction::SetTrue)]
        verify: bool,

        /// Attach summary statistics under "stats"
        #[arg(long = "stats", action = ArgAction::SetTrue)]
        stats: bool,

        /// Factorize the matrix as given, skipping the rotation
        #[arg(long = "no-rotate", action = ArgAction::SetTrue, conflicts_with = "clockwise")]
        no_rotate: bool,

        /// Rotate clockwise instead (last input row becomes the first column)
        #[arg(long = "clockwise", action = ArgAction::SetTrue)]
        clockwise: bool,
    },

    /// Rotate a {"data": [[..]]} payload 90° counter-clockwise
    Rotate {
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
        #[arg(long = "pretty", action = ArgAction::SetTrue)]
        pretty: bool,
        /// Rotate clockwise instead
        #[arg(long = "clockwise", action = ArgAction::SetTrue)]
        clockwise: bool,
    },

    /// Summary statistics of a {"Q": .., "R": ..} payload
    Stats {
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
        #[arg(long = "pretty", action = ArgAction::SetTrue)]
        pretty: bool,
    },
}
