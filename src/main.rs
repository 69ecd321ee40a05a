use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use skillpulse::collect::collect_to_csv;
use skillpulse::config::log_directives;
use skillpulse::dashboard::server::{self, AppState};
use skillpulse::dashboard::{ContentType, RenderMode};
use skillpulse::generator::summarize;
use skillpulse::models::EngagementTier;
use skillpulse::reddit::archive::DEFAULT_ARCHIVE_URL;
use skillpulse::{
    ArchiveClient, ArchiveCollector, ArchivePlan, CleanConfig, CleaningPipeline, Config,
    Dashboard, DashboardFilters, DashboardVariant, DatasetGenerator, GeneratorConfig,
    RedditClient, SearchCollector, SearchPlan,
};

#[derive(Parser, Debug)]
#[command(name = "skillpulse")]
#[command(version = "0.1.0")]
#[command(about = "Collect, clean and explore Reddit discussion of skills-based hiring")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a seeded synthetic raw dataset
    Generate {
        /// Output CSV (defaults to the raw data path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = "42")]
        seed: u64,

        /// Rows before injected duplicates
        #[arg(long, default_value = "500")]
        rows: usize,

        #[arg(long, default_value = "15")]
        duplicates: usize,

        #[arg(long, default_value = "5")]
        empty_bodies: usize,
    },

    /// Collect posts and comments from Reddit
    Collect {
        #[command(subcommand)]
        source: CollectSource,
    },

    /// Clean the raw CSV into the analysis-ready dataset
    Clean {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a dashboard to a standalone HTML file
    Dashboard {
        #[arg(long, value_enum, default_value = "overview")]
        variant: DashboardVariant,

        /// Cleaned CSV (defaults to the cleaned data path)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Policy events CSV (optional overlay)
        #[arg(long)]
        events: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Serve the dashboard with live sidebar filters
    Serve {
        #[arg(long, default_value = "127.0.0.1:8501")]
        addr: SocketAddr,

        #[arg(long, value_enum, default_value = "overview")]
        variant: DashboardVariant,

        #[arg(long)]
        data: Option<PathBuf>,

        #[arg(long)]
        events: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum CollectSource {
    /// Reddit search API (needs REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET)
    Search {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_delimiter = ',')]
        subreddits: Vec<String>,

        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Submissions per subreddit and keyword
        #[arg(long, default_value = "100")]
        limit: u32,

        #[arg(long, default_value = "5")]
        min_score: i64,
    },

    /// Archival submission search
    Archive {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = DEFAULT_ARCHIVE_URL)]
        base_url: String,

        #[arg(long, value_delimiter = ',')]
        subreddits: Vec<String>,

        /// Total submissions to fetch
        #[arg(long, default_value = "500")]
        limit: usize,
    },
}

#[derive(clap::Args, Debug)]
struct FilterArgs {
    #[arg(long)]
    start: Option<NaiveDate>,

    #[arg(long)]
    end: Option<NaiveDate>,

    /// Restrict to these subreddits (repeatable)
    #[arg(long = "subreddit")]
    subreddits: Vec<String>,

    #[arg(long, value_enum, default_value = "all")]
    content: ContentType,

    /// Restrict to these engagement tiers (repeatable)
    #[arg(long = "tier")]
    tiers: Vec<EngagementTier>,

    /// Case-insensitive text search over title and body
    #[arg(long)]
    search: Option<String>,
}

impl From<FilterArgs> for DashboardFilters {
    fn from(args: FilterArgs) -> Self {
        Self {
            start: args.start,
            end: args.end,
            subreddits: (!args.subreddits.is_empty()).then_some(args.subreddits),
            content: args.content,
            tiers: (!args.tiers.is_empty()).then_some(args.tiers),
            search: args.search,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(log_directives(rust_log.as_deref()))?)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    match args.command {
        Command::Generate {
            output,
            seed,
            rows,
            duplicates,
            empty_bodies,
        } => {
            let output = output.unwrap_or_else(|| config.raw_path());
            let generator_config = GeneratorConfig {
                seed,
                rows,
                duplicates,
                empty_bodies,
                window: config.study_window,
                ..GeneratorConfig::default()
            };
            generate(generator_config, &output)?;
        }

        Command::Collect { source } => collect(&config, source).await?,

        Command::Clean { input, output } => {
            let mut clean_config = CleanConfig::from(&config);
            if let Some(input) = input {
                clean_config.input = input;
            }
            if let Some(output) = output {
                clean_config.output = output;
            }

            tracing::info!("Starting cleaning of {}", clean_config.input.display());
            let report = CleaningPipeline::new(clean_config).run()?;
            tracing::info!(
                "Cleaning complete: {} loaded, {} written",
                report.loaded,
                report.written
            );
        }

        Command::Dashboard {
            variant,
            data,
            events,
            output,
            filters,
        } => {
            let dashboard = load_dashboard(&config, data, events);
            let html = dashboard.render(variant, &filters.into(), RenderMode::Static)?;
            let output = output.unwrap_or_else(|| {
                config
                    .data_dir
                    .join(format!("dashboard_{}.html", variant.key()))
            });
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, html)?;
            tracing::info!("Dashboard written to: {}", output.display());
        }

        Command::Serve {
            addr,
            variant,
            data,
            events,
        } => {
            let dashboard = load_dashboard(&config, data, events);
            server::serve(AppState::new(dashboard, variant), addr).await?;
        }
    }

    Ok(())
}

fn generate(config: GeneratorConfig, output: &Path) -> anyhow::Result<()> {
    tracing::info!("Generating {} rows with seed {}", config.rows, config.seed);
    let rows = DatasetGenerator::new(config)?.generate();
    skillpulse::storage::write_raw(output, &rows)?;

    let summary = summarize(&rows);
    tracing::info!("Saved {} rows to {}", summary.rows, output.display());
    tracing::info!("Posts: {}, comments: {}", summary.posts, summary.comments);
    for (subreddit, count) in &summary.by_subreddit {
        tracing::info!("  r/{}: {}", subreddit, count);
    }
    tracing::info!(
        "Score min {}, max {}, mean {:.1}",
        summary.min_score,
        summary.max_score,
        summary.mean_score
    );
    if let (Some(earliest), Some(latest)) = (summary.earliest, summary.latest) {
        tracing::info!("Date range: {} to {}", earliest, latest);
    }
    tracing::info!("Empty bodies: {}", summary.empty_bodies);
    tracing::info!("Rows sharing a (thread_id, id) key: {}", summary.duplicate_key_rows);
    Ok(())
}

async fn collect(config: &Config, source: CollectSource) -> anyhow::Result<()> {
    let raw_dir = config.data_dir.join("raw");
    match source {
        CollectSource::Search {
            output,
            subreddits,
            keywords,
            limit,
            min_score,
        } => {
            let (client_id, client_secret) = config.reddit_credentials()?;
            let client = RedditClient::connect(
                &client_id,
                &client_secret,
                &config.user_agent,
                config.request_delay,
            )
            .await?;

            let mut plan = SearchPlan {
                limit,
                min_score,
                sleep: config.request_delay,
                ..SearchPlan::default()
            };
            if !subreddits.is_empty() {
                plan.subreddits = subreddits;
            }
            if !keywords.is_empty() {
                plan.keywords = keywords;
            }

            let output = output.unwrap_or_else(|| raw_dir.join("reddit_skills_combined.csv"));
            collect_to_csv(&SearchCollector::new(client, plan), &output).await?;
        }

        CollectSource::Archive {
            output,
            base_url,
            subreddits,
            limit,
        } => {
            let client = ArchiveClient::new(&base_url, config.request_delay)?;
            let mut plan = ArchivePlan {
                limit,
                ..ArchivePlan::default()
            };
            if !subreddits.is_empty() {
                plan.subreddits = subreddits;
            }

            let output = output.unwrap_or_else(|| raw_dir.join("reddit_skills_data.csv"));
            collect_to_csv(&ArchiveCollector::new(client, plan), &output).await?;
        }
    }
    Ok(())
}

/// A missing cleaned dataset is reported plainly and halts the program.
fn load_dashboard(config: &Config, data: Option<PathBuf>, events: Option<PathBuf>) -> Dashboard {
    let data = data.unwrap_or_else(|| config.cleaned_path());
    let events = events.unwrap_or_else(|| config.policy_events_path());

    match Dashboard::load(&data, &events) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            if e.is_user_facing() {
                eprintln!("{}", e);
            } else {
                eprintln!("Failed to load dashboard data: {}", e);
            }
            std::process::exit(1);
        }
    }
}
