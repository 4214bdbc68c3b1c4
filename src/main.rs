//! Prompt Feed - command line entry point
//!
//! Acquires the feed for the requested facets, filters it and prints the
//! visible records (or tag suggestions).

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;

use prompt_feed::{
    AcquisitionStatus, Category, ConfigService, Country, DateRange, Facet, FeedSnapshot,
    Platform, PromptFeed, SelectionUpdate,
};

#[derive(Debug, Parser)]
#[command(name = "prompt-feed", version, about = "Browse and filter generated AI prompts")]
struct Cli {
    /// Category: All, "Image Generation", Writing, Code or "Viral Trends"
    #[arg(short, long)]
    category: Option<Facet<Category>>,

    /// Trend platform (only applies to "Viral Trends")
    #[arg(short, long)]
    platform: Option<Facet<Platform>>,

    /// Trend country, "Global" for no constraint
    #[arg(long)]
    country: Option<Country>,

    /// Start of the trending date window (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// End of the trending date window (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// Required tag; repeat for several (all must match)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Case-insensitive search over text, model and tags
    #[arg(short, long)]
    search: Option<String>,

    /// Print tag suggestions for this fragment instead of the feed
    #[arg(long)]
    suggest: Option<String>,

    /// Print the feed snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let service = match &cli.config {
        Some(path) => ConfigService::load_or_create(path.clone()),
        None => ConfigService::new(),
    }
    .context("failed to load configuration")?;
    let feed = PromptFeed::from_config(&service.resolved_config())?;

    let date_range = match (cli.from, cli.to) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
        _ => None,
    };

    // Facets that decide what gets acquired
    let mut acquisition = SelectionUpdate::new();
    if let Some(category) = cli.category {
        acquisition = acquisition.category(category);
    }
    if let Some(country) = cli.country {
        acquisition = acquisition.country(country);
    }
    if date_range.is_some() {
        acquisition = acquisition.date_range(date_range);
    }
    if feed.update_selection(acquisition).await.is_none() {
        feed.start().await;
    }

    if let AcquisitionStatus::Error { message } = feed.status().await {
        bail!(message);
    }

    // Facets applied over the acquired set
    let mut refinement = SelectionUpdate::new().tags(cli.tags);
    if let Some(platform) = cli.platform {
        refinement = refinement.platform(platform);
    }
    if let Some(term) = cli.search {
        refinement = refinement.search(term);
    }
    feed.update_selection(refinement).await;

    if let Some(fragment) = cli.suggest {
        for tag in feed.tag_suggestions(&fragment).await {
            println!("{}", tag);
        }
        return Ok(());
    }

    let snapshot = feed.snapshot().await;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}

fn status_line(status: &AcquisitionStatus) -> String {
    match status {
        AcquisitionStatus::Idle => "Status: idle".to_string(),
        AcquisitionStatus::Loading => "Status: loading...".to_string(),
        AcquisitionStatus::Success => "Status: ready".to_string(),
        AcquisitionStatus::Error { message } => format!("Status: error - {}", message),
    }
}

fn print_snapshot(snapshot: &FeedSnapshot) {
    println!("{}", status_line(&snapshot.status));
    for record in &snapshot.visible {
        println!("[{}] {}", record.category, record.prompt_text);
        let mut meta = vec![format!("model: {}", record.target_model)];
        if let (Some(platform), Some(country)) = (&record.platform, &record.country) {
            meta.push(format!("{} / {}", platform, country));
        }
        if let Some(date) = &record.trending_date {
            meta.push(date.clone());
        }
        if !record.tags.is_empty() {
            meta.push(
                record
                    .tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        println!("    {}", meta.join(" | "));
    }
    println!(
        "{} of {} prompts shown",
        snapshot.visible.len(),
        snapshot.total
    );
}
