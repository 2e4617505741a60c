//! FlickFind CLI: recommendation search from the terminal.
//!
//! Talks to the same `/recommend` endpoint as the web widget and renders the
//! results through `flickfind-core`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flickfind_core::markup::split_title;
use flickfind_core::share::share_url;
use flickfind_core::{load_widget_config, RecommendClient, ResultEntry, ScoredItem, Url, WidgetConfig};

/// FlickFind CLI: find similar movies from the terminal.
#[derive(Parser)]
#[command(name = "flickfind", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Widget config file (TOML)
    #[arg(long, global = true, default_value = "flickfind.toml")]
    config: PathBuf,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the server for movies similar to a title
    Recommend {
        /// Movie title (partial match)
        query: String,

        /// Number of recommendations (default: result_count from config)
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Page URL the API root is resolved against (default: page_url from config)
        #[arg(long)]
        server: Option<String>,
    },
    /// Print a shareable link that reruns a search
    Share {
        /// Movie title
        query: String,

        /// Number of recommendations in the link
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Page URL to link to (default: page_url from config)
        #[arg(long)]
        page: Option<String>,
    },
}

fn parse_page(raw: Option<String>, config: &WidgetConfig) -> Url {
    let raw = raw.unwrap_or_else(|| config.page_url.clone());
    match Url::parse(&raw) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Invalid URL '{raw}': {e}");
            std::process::exit(2);
        }
    }
}

/// One terminal line per entry: percent, tier, title, year, meta.
fn format_entry(rank: usize, item: &ScoredItem) -> String {
    let entry = ResultEntry::from_item(item);
    let (title, year) = split_title(&item.title);
    let title = if title.is_empty() { "#" } else { title };
    let year = if year.is_empty() { String::new() } else { format!(" ({year})") };
    format!(
        "{rank:>3}. {pct:>3}% [{tier:<4}] {title}{year}  {meta}",
        pct = entry.percent,
        tier = entry.tier.as_str(),
        meta = entry.meta(),
    )
}

fn entry_json(item: &ScoredItem) -> serde_json::Value {
    let entry = ResultEntry::from_item(item);
    let (title, year) = split_title(&item.title);
    serde_json::json!({
        "movieId": item.movie_id,
        "title": title,
        "year": year,
        "distance": entry.distance,
        "similarity": entry.similarity,
        "percent": entry.percent,
        "tier": entry.tier,
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flickfind=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_widget_config(&cli.config);

    match cli.command {
        Commands::Recommend { query, count, server } => {
            let query = query.trim().to_string();
            if query.is_empty() {
                eprintln!("Query must not be empty");
                std::process::exit(2);
            }
            let count = count.unwrap_or(config.result_count);
            let page = parse_page(server, &config);
            let client = match RecommendClient::for_page(&page, &config.api_root) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            };

            let response = match client.recommend(&query, count).await {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            let items = response.results.unwrap_or_default();

            if cli.json {
                let out: Vec<serde_json::Value> = items.iter().map(entry_json).collect();
                match serde_json::to_string_pretty(&out) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to encode JSON: {e}");
                        std::process::exit(1);
                    }
                }
            } else if items.is_empty() {
                eprintln!("No results found for '{query}'");
                std::process::exit(1);
            } else {
                println!("{} recommendations for \"{query}\"", items.len());
                for (i, item) in items.iter().enumerate() {
                    println!("{}", format_entry(i + 1, item));
                }
            }
        }
        Commands::Share { query, count, page } => {
            let page = parse_page(page, &config);
            let count = count.unwrap_or(config.share_count);
            println!("{}", share_url(&page, &query, count));
        }
    }
}
