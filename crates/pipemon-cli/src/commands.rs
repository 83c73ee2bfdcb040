use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use pipemon_client::{
    fetch_pair, EnvCredential, FactoryConfig, HttpPipelineService, PipelineService,
};
use pipemon_diff::{diff_trees, normalize, DEFAULT_EXCLUDED_KEYS};
use pipemon_report::{
    render_compare_report, render_pipeline_summary, render_run_summary, render_timeseries,
    summarize_pipelines, summarize_runs,
};

use crate::cli::{
    AnalyzeArgs, Cli, Command, CompareArgs, ConfigAction, ConfigArgs, SummarizeArgs,
    SummarizeRunsArgs, SummarizeTarget,
};

/// Process outcome, mapped to an exit code in `main`: 0 for `Clean`
/// (including "no differences"), 1 for `DifferencesFound`; errors map to 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    DifferencesFound,
}

pub async fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    match cli.command {
        Command::Compare(args) => {
            let (_, service) = build_service(&cli.config)?;
            cmd_compare(&service, &args).await
        }
        Command::Summarize(SummarizeArgs { target }) => {
            let (config, service) = build_service(&cli.config)?;
            match target {
                SummarizeTarget::Runs(args) => cmd_summarize_runs(&service, &args).await,
                SummarizeTarget::Pipelines => {
                    cmd_summarize_pipelines(&service, &config.factory_name).await
                }
            }
        }
        Command::Analyze(args) => {
            let (_, service) = build_service(&cli.config)?;
            cmd_analyze(&service, &args).await
        }
        Command::Config(args) => cmd_config(Path::new(&cli.config), args),
    }
}

fn build_service(config_path: &str) -> anyhow::Result<(FactoryConfig, HttpPipelineService)> {
    let config = FactoryConfig::load(Path::new(config_path))?;
    tracing::debug!(factory = %config.factory_name, "resolved factory config");
    let service = HttpPipelineService::new(config.clone(), Arc::new(EnvCredential))?;
    Ok((config, service))
}

async fn cmd_compare(
    service: &dyn PipelineService,
    args: &CompareArgs,
) -> anyhow::Result<Outcome> {
    let (first, second) = fetch_pair(service, &args.name1, &args.name2).await?;

    let left = normalize(&first, DEFAULT_EXCLUDED_KEYS)?;
    let right = normalize(&second, DEFAULT_EXCLUDED_KEYS)?;
    let diff = diff_trees(&left, &right);

    print!("{}", render_compare_report(&diff, &args.name1, &args.name2));

    if diff.is_empty() {
        Ok(Outcome::Clean)
    } else {
        Ok(Outcome::DifferencesFound)
    }
}

async fn cmd_summarize_runs(
    service: &dyn PipelineService,
    args: &SummarizeRunsArgs,
) -> anyhow::Result<Outcome> {
    let runs = service.query_runs(args.days, None).await?;
    let summaries = summarize_runs(&runs, &args.name);
    print!("{}", render_run_summary(&summaries));
    Ok(Outcome::Clean)
}

async fn cmd_summarize_pipelines(
    service: &dyn PipelineService,
    factory_name: &str,
) -> anyhow::Result<Outcome> {
    let pipelines = service.list_pipelines().await?;
    let summaries = summarize_pipelines(factory_name, &pipelines);
    print!("{}", render_pipeline_summary(&summaries));
    Ok(Outcome::Clean)
}

async fn cmd_analyze(service: &dyn PipelineService, args: &AnalyzeArgs) -> anyhow::Result<Outcome> {
    // The service filters by exact name server-side; no local filtering.
    let runs = service.query_runs(args.days, Some(&args.name)).await?;
    print!("{}", render_timeseries(&args.name, &runs));
    Ok(Outcome::Clean)
}

fn cmd_config(path: &Path, args: ConfigArgs) -> anyhow::Result<Outcome> {
    match args.action {
        ConfigAction::Set {
            subscription_id,
            resource_group,
            factory_name,
        } => {
            let config = FactoryConfig::new(subscription_id, resource_group, factory_name);
            config.validate()?;
            config.save(path)?;
            println!("{} wrote {}", "\u{2714}".green(), path.display());
        }
        ConfigAction::Show => {
            let config = FactoryConfig::load(path)?;
            println!("subscription_id = {}", config.subscription_id);
            println!("resource_group  = {}", config.resource_group);
            println!("factory_name    = {}", config.factory_name);
        }
    }
    Ok(Outcome::Clean)
}
