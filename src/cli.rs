use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ECG noise features from wavelet band omission.
#[derive(Parser)]
#[command(
    name = "ecgnoise",
    version,
    about = "Wavelet band-omission residuals and band statistics for ECG records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Residual of every manifest record after omitting wavelet bands.
    Residuals(ResidualsArgs),
    /// Per-band statistics of every manifest record.
    Features(FeaturesArgs),
}

/// Options shared by every subcommand. Each one overrides the config file.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file. Defaults apply when omitted and
    /// `ecgnoise.toml` does not exist.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Record manifest, one name per line.
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Directory holding the record files.
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Record file format (mat, text).
    #[arg(long)]
    pub format: Option<String>,

    /// Wavelet name (haar, db2, db3, db4, sym4, coif1, bior2.2).
    #[arg(short, long)]
    pub wavelet: Option<String>,

    /// Decomposition depth.
    #[arg(short, long)]
    pub levels: Option<usize>,

    /// Boundary extension mode (zero, constant, symmetric, reflect, periodic).
    #[arg(long)]
    pub mode: Option<String>,

    /// Transform (decimated, stationary).
    #[arg(short, long)]
    pub transform: Option<String>,

    /// Output path; `.json` selects JSON, anything else CSV.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `residuals` subcommand.
#[derive(clap::Args)]
pub struct ResidualsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Detail levels to omit, 1 = finest (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub omit: Vec<usize>,

    /// Also omit the approximation band.
    #[arg(long = "omit-approx")]
    pub omit_approx: bool,
}

/// Arguments for the `features` subcommand.
#[derive(clap::Args)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
