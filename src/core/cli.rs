use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    /// The `gh` client will be run in this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Config file to use instead of the nearest prstats.toml
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Report file to write (overrides config `output`)
    #[arg(long, global = true)]
    pub output: Option<String>,

    /// Repository as OWNER/REPO (overrides config `repo`)
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// Maximum results requested per query (overrides config `limit`)
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// Maximum number of concurrent `gh` processes (overrides config `max_concurrency`)
    #[arg(long = "max-concurrency", global = true)]
    pub max_concurrency: Option<usize>,

    /// Logging level (overrides env/config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect pull requests and issues and write the markdown report
    Generate,

    /// Write an example prstats.toml into the current directory
    Init,

    /// Print various information about the current setup
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// Print the effective configuration
    Config(PrintConfigArgs),
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}
