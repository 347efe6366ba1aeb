use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

/// Planar face construction and seed point generation tool.
#[derive(Debug, Parser)]
pub struct FaceseedCli {
    #[clap(subcommand)]
    pub sub_command: CliCommand,
}

/// Parser for the subcommands of the faceseed binary using clap.
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    #[command(name = "run")]
    /// Run the seeding process from a config file.
    Run(RunArgs),

    #[command(name = "inspect")]
    /// Print the face metrics from a config file without seeding.
    Inspect(InspectArgs),

    #[command(name = "example")]
    /// Print an example config file for a seeding method.
    Example(ExampleArgs),
}

/// Shared arguments, used by the run and inspect commands. Compiled with clap.
#[derive(Debug, Args)]
pub struct SharedArgs {
    #[arg(short, long, default_value_t = 3)]
    /// Decimal places used when printing coordinates and metrics.
    pub precision: usize,
}

/// Compiled arguments for the run command. Compiled with clap.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(short, long = "cfg")]
    /// Path to the seeding config file (.json/.toml/.yaml/.yml).
    pub cfg_path: String,

    #[arg(short, long)]
    /// Skip the per-point listing (face metrics are still printed).
    pub quiet: bool,

    #[command(flatten)]
    pub shared_args: SharedArgs,
}

/// Compiled arguments for the inspect command. Compiled with clap.
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[arg(short, long = "cfg")]
    /// Path to the seeding config file (.json/.toml/.yaml/.yml).
    pub cfg_path: String,

    #[command(flatten)]
    pub shared_args: SharedArgs,
}

/// Compiled arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Seeding method to print an example config for.
    /// Omit to list the available methods and grid modes.
    pub method: Option<String>,

    #[arg(short, long, value_enum, default_value = "yaml")]
    /// Config format to print.
    pub format: Format,
}

/// Config file formats for example output. Compiled with clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

/// Parse the command line arguments for the faceseed binary.
/// Uses the `clap` crate.
pub fn parse_cli_args() -> FaceseedCli {
    FaceseedCli::parse()
}
