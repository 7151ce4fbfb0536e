use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jobscope")]
#[command(author, version, about = "Job market skill aggregation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides config)
    #[arg(long, global = true, env = "JOBSCOPE_API_URL")]
    pub base_url: Option<String>,

    /// Path to config.toml (default: ./jobscope.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search job postings
    Jobs {
        /// Keyword search over title, company, description
        #[arg(default_value = "")]
        query: String,

        #[arg(long)]
        job_family: Option<String>,

        #[arg(long)]
        seniority: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Maximum number of results (server caps at 500)
        #[arg(short, long, default_value_t = 100)]
        limit: usize,
    },

    /// Show required skills for one job
    Skills {
        /// Job id from a previous search
        job_id: u64,
    },

    /// Aggregate skills across the current search results
    Market {
        /// Keyword search defining the result set
        #[arg(default_value = "")]
        query: String,

        #[arg(long)]
        job_family: Option<String>,

        #[arg(long)]
        seniority: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(short, long, default_value_t = 100)]
        limit: usize,
    },

    /// Check backend availability
    Health,
}
