use clap::{Args, Parser, Subcommand};
use isoscore::core::elements::MAX_TABULATED_Z;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "isoscore - estimate nuclear binding energy and stability, and screen isotopes for medical use.",
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

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub evaluator: EvaluatorArgs,
}

/// Evaluator parameters shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct EvaluatorArgs {
    /// Path to an enhancement parameter file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the Tesla resonance boost, in [0, 1].
    #[arg(long, global = true, value_name = "FLOAT")]
    pub tesla_boost: Option<f64>,

    /// Override the consciousness level, in [0, 1].
    #[arg(long, global = true, value_name = "FLOAT")]
    pub consciousness_level: Option<f64>,

    /// Override the final error-correction factor, in [0, 1].
    #[arg(long, global = true, value_name = "FLOAT")]
    pub error_correction: Option<f64>,

    /// Override the score above which a nucleus counts as stable.
    #[arg(long, global = true, value_name = "FLOAT")]
    pub stability_threshold: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the total binding energy of a nuclide.
    Energy(NuclideArgs),
    /// Score the stability of a nuclide and predict its decay mode.
    Stability(NuclideArgs),
    /// Scan for nuclides whose stability falls inside the medical window.
    Medical(MedicalArgs),
    /// Compare calculated values against accepted reference data.
    Validate(ValidateArgs),
}

/// A nuclide given by its nucleon counts.
#[derive(Args, Debug, Clone, Copy)]
pub struct NuclideArgs {
    /// Proton count Z.
    #[arg(short, long, required = true, allow_negative_numbers = true)]
    pub z: i64,

    /// Neutron count N.
    #[arg(short, long, required = true, allow_negative_numbers = true)]
    pub n: i64,
}

/// Arguments for the `medical` subcommand.
#[derive(Args, Debug, Clone, Copy)]
pub struct MedicalArgs {
    /// Highest proton count to scan, up to the last tabulated element.
    #[arg(
        long,
        default_value_t = 100,
        value_name = "INT",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TABULATED_Z)),
    )]
    pub z_max: u32,

    /// Number of ranked candidates to print.
    #[arg(short, long, default_value_t = 20, value_name = "INT")]
    pub limit: usize,

    /// Lower bound of the medical stability window.
    #[arg(long, value_name = "FLOAT")]
    pub window_lower: Option<f64>,

    /// Upper bound of the medical stability window.
    #[arg(long, value_name = "FLOAT")]
    pub window_upper: Option<f64>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// CSV file with columns `z,n,stable` to use instead of the built-in stability reference set.
    #[arg(short, long, value_name = "PATH")]
    pub references: Option<PathBuf>,
}
