use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod size;
pub mod version;

/// The frame families carried on the actuator link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FrameKind {
    Servo,
    Motor,
    Io,
    Avoidance,
    Moving,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a hex-encoded frame and print its records.
    Decode(DecodeArgs),
    /// Encode a typed JSON value into frame bytes.
    Encode(EncodeArgs),
    /// Print the exact frame size for given record counts.
    Size(SizeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args),
        Command::Size(args) => size::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame type.
    pub kind: FrameKind,
    /// Hex-encoded frame bytes; whitespace is tolerated.
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Frame type.
    pub kind: FrameKind,
    /// JSON value (same shape as `decode --format json` output).
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the JSON value from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Frame type.
    pub kind: FrameKind,
    /// Record counts: one value for servo, three for motor, none for io.
    pub counts: Vec<usize>,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
