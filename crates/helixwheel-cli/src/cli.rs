use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "helixwheel",
    author,
    version,
    about = "helixwheel - Draw helical wheel projections of peptide sequences, colored by side-chain chemistry.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a sequence as a helical wheel image (PNG, JPEG, BMP or SVG).
    Draw(DrawArgs),
    /// Print residue angles, coordinates, categories and the hydrophobic moment.
    Inspect(InspectArgs),
}

/// Options shared by every command that builds a wheel.
#[derive(Args, Debug, Clone, Default)]
pub struct WheelArgs {
    /// Peptide sequence in one-letter codes (e.g., KLLKLLKKLLKLLK).
    #[arg(short, long, required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Rotation per residue in degrees (100 for an alpha-helix).
    #[arg(long = "step", value_name = "DEGREES")]
    pub step_degrees: Option<f64>,

    /// Radius of the wheel.
    #[arg(short, long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S render.width=800
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `draw` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct DrawArgs {
    #[command(flatten)]
    pub wheel: WheelArgs,

    /// Path of the image to write; the format follows the extension.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    // --- Canvas ---
    /// Image width in pixels.
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Image height in pixels.
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Title printed above the wheel.
    #[arg(short, long, value_name = "TEXT")]
    pub title: Option<String>,

    // --- Decorations ---
    /// Do not print residue letters on the markers.
    #[arg(long)]
    pub no_labels: bool,

    /// Do not print residue numbers under the letters.
    #[arg(long)]
    pub no_numbers: bool,

    /// Do not draw the category legend.
    #[arg(long)]
    pub no_legend: bool,

    /// Do not connect consecutive residues.
    #[arg(long)]
    pub no_backbone: bool,

    /// Draw the hydrophobic moment as an arrow from the wheel center.
    #[arg(long)]
    pub moment: bool,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct InspectArgs {
    #[command(flatten)]
    pub wheel: WheelArgs,
}
