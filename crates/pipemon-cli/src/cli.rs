use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pipemon",
    about = "pipemon — a data-factory pipeline monitor",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the factory config file.
    #[arg(long, global = true, default_value = "pipemon.toml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the contents of two pipelines
    Compare(CompareArgs),
    /// Summarize recent runs or the factory's pipeline structure
    Summarize(SummarizeArgs),
    /// Plot run durations for one pipeline
    Analyze(AnalyzeArgs),
    /// Get or set the factory configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// The first pipeline to compare
    #[arg(long)]
    pub name1: String,
    /// The second pipeline to compare
    #[arg(long)]
    pub name2: String,
}

#[derive(Args)]
pub struct SummarizeArgs {
    #[command(subcommand)]
    pub target: SummarizeTarget,
}

#[derive(Subcommand)]
pub enum SummarizeTarget {
    /// Summarize recent pipeline runs
    Runs(SummarizeRunsArgs),
    /// Summarize pipelines and activities per folder
    Pipelines,
}

#[derive(Args)]
pub struct SummarizeRunsArgs {
    /// How many days of run history to include (1..=30)
    #[arg(short = 'd', long, default_value = "7")]
    pub days: i64,
    /// Only include pipelines whose name contains this substring
    #[arg(short, long, default_value = "")]
    pub name: String,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// How many days of run history to include (1..=30)
    #[arg(short = 'd', long, default_value = "7")]
    pub days: i64,
    /// The pipeline to analyze
    #[arg(short, long)]
    pub name: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write the factory configuration file
    Set {
        #[arg(long)]
        subscription_id: String,
        #[arg(long)]
        resource_group: String,
        #[arg(long)]
        factory_name: String,
    },
    /// Print the resolved configuration
    Show,
}
