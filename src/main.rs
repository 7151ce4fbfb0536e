use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jobscope::cli::{Cli, Commands, render_jobs, render_market, render_skills};
use jobscope::config::JobscopeConfig;
use jobscope::domain::{JobFilters, JobId};
use jobscope::error::Result;
use jobscope::{HttpJobsClient, JobsApi, MarketBuilder, SkillCache};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("jobscope=debug")
    } else {
        EnvFilter::new("jobscope=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from("jobscope.toml"));
    let mut config = JobscopeConfig::load(&config_path).await?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let api: Arc<dyn JobsApi> = Arc::new(HttpJobsClient::new(&config.api)?);

    match cli.command {
        Commands::Jobs {
            query,
            job_family,
            seniority,
            location,
            limit,
        } => {
            let filters = filters(query, job_family, seniority, location, limit);
            let jobs = api.fetch_jobs(&filters).await?;
            println!("{}", render_jobs(&jobs));
        }

        Commands::Skills { job_id } => {
            let payload = api
                .fetch_job_skills(JobId(job_id), config.market.skills_top_n)
                .await?;
            println!("{}", render_skills(&payload));
        }

        Commands::Market {
            query,
            job_family,
            seniority,
            location,
            limit,
        } => {
            let filters = filters(query, job_family, seniority, location, limit);
            let jobs = api.fetch_jobs(&filters).await?;
            let job_ids: Vec<JobId> = jobs.iter().map(|j| j.job_id).collect();

            let cache = Arc::new(SkillCache::new(config.cache.policy()));
            let builder = MarketBuilder::new(api, cache, config.market.clone());

            // Single caller, so the build is never superseded here.
            if let Some(view) = builder.build(&job_ids).await? {
                println!("{}", render_market(&view, job_ids.len()));
            }
        }

        Commands::Health => {
            let status = api.health().await?;
            if status.is_ok() {
                let jobs = status.jobs.unwrap_or(0);
                println!("backend ok ({jobs} jobs loaded)");
            } else {
                println!(
                    "backend {}: {}",
                    status.status,
                    status.detail.unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}

fn filters(
    query: String,
    job_family: Option<String>,
    seniority: Option<String>,
    location: Option<String>,
    limit: usize,
) -> JobFilters {
    JobFilters {
        job_family,
        seniority,
        location,
        limit,
        ..JobFilters::with_query(query)
    }
}
