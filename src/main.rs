use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

use wayfare::catalog::{self, FilterCriteria, PriceBracket, SortKey};
use wayfare::config::Config;
use wayfare::source::{CatalogSource, FixtureCatalog};
use wayfare::wizard::flows::{self, fields};
use wayfare::wizard::{AnswerValue, NextOutcome};
use wayfare::{error, logging, server};

#[derive(Parser)]
#[command(name = "wayfare")]
#[command(about = "Tourism catalog browsing and trip-planning engine")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a JSON fixture catalog (defaults to the bundled one)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP/GraphQL server over the fixture catalog
    Serve {
        /// Port to listen on (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run one filtered, sorted listing view and print it
    Browse {
        /// Free-text search over name, description and location
        #[arg(long)]
        search: Option<String>,
        /// Category tag, e.g. waterfall, trek, handicraft
        #[arg(long)]
        category: Option<String>,
        /// Inclusive lower price bound (rupees)
        #[arg(long)]
        min_price: Option<f64>,
        /// Inclusive upper price bound (rupees)
        #[arg(long)]
        max_price: Option<f64>,
        /// Sort key: popularity, rating, price-asc, price-desc
        #[arg(long, default_value = "popularity")]
        sort: String,
        /// Page size
        #[arg(long)]
        limit: Option<usize>,
        /// Items to skip before the page starts
        #[arg(long)]
        offset: Option<usize>,
    },
    /// Drive the itinerary planner wizard from flags and print the plan
    Plan {
        /// Number of travelers
        #[arg(long)]
        travelers: u32,
        /// Trip start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,
        /// Total budget in rupees
        #[arg(long)]
        budget: f64,
        /// Comma-separated interest tags
        #[arg(long, default_value = "waterfall")]
        interests: String,
    },
}

fn load_catalog(path_flag: Option<&str>, config: &Config) -> error::Result<FixtureCatalog> {
    match path_flag.or(config.catalog.fixture_path.as_deref()) {
        Some(path) => FixtureCatalog::from_file(path),
        None => Ok(FixtureCatalog::bundled()),
    }
}

async fn run_browse(
    catalog: &FixtureCatalog,
    criteria: FilterCriteria,
    limit: Option<usize>,
    offset: Option<usize>,
) -> anyhow::Result<()> {
    let items = catalog.all_items().await?;
    let page = catalog::view_page(&items, &criteria, limit, offset);

    info!(total = items.len(), shown = page.len(), "browse view computed");

    if page.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!(
        "{:<32} {:<12} {:>8} {:>7} {:>7}",
        "Name", "Category", "Price", "Rating", "Reviews"
    );
    for item in &page {
        println!(
            "{:<32} {:<12} {:>8.0} {:>7.1} {:>7}",
            item.name, item.category, item.price, item.rating, item.popularity
        );
    }
    println!("\n{} item(s) shown", page.len());
    Ok(())
}

fn run_plan(travelers: u32, start_date: &str, budget: f64, interests: &str) -> anyhow::Result<()> {
    let start_date: chrono::NaiveDate = start_date.parse()?;
    let interest_list: Vec<String> = interests
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut wizard = flows::itinerary_wizard()?;
    wizard.set_answer(fields::TRAVELERS, AnswerValue::Count(travelers));
    wizard.set_answer(fields::START_DATE, AnswerValue::Date(start_date));
    wizard.set_answer(fields::BUDGET, AnswerValue::Number(budget));
    wizard.set_answer(fields::INTERESTS, AnswerValue::TextList(interest_list));

    // Walk the flow the way a page would: one go_next per step, stopping
    // at the first step whose inputs are missing.
    loop {
        match wizard.go_next() {
            NextOutcome::Advanced(_) => continue,
            NextOutcome::Completed(answers) => {
                println!("✅ Itinerary plan complete:");
                for (field, value) in answers.iter() {
                    println!("   {}: {:?}", field, value);
                }
                return Ok(());
            }
            NextOutcome::Rejected => {
                println!(
                    "❌ Plan stalled at step '{}' — required inputs missing",
                    wizard.current_step().id()
                );
                return Ok(());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|_| Config::default_config());
    let catalog = match load_catalog(cli.catalog.as_deref(), &config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            let catalog: Arc<dyn CatalogSource> = Arc::new(catalog);
            server::start_server(catalog, config.catalog.default_page_size, port).await?;
        }
        Commands::Browse {
            search,
            category,
            min_price,
            max_price,
            sort,
            limit,
            offset,
        } => {
            let sort: SortKey = sort.parse()?;
            let mut criteria = FilterCriteria::default()
                .with_price(PriceBracket::from_bounds(min_price, max_price))
                .with_sort(sort);
            if let Some(search) = search {
                criteria = criteria.with_search(search);
            }
            if let Some(category) = category {
                criteria = criteria.with_category(category);
            }
            run_browse(&catalog, criteria, limit, offset).await?;
        }
        Commands::Plan {
            travelers,
            start_date,
            budget,
            interests,
        } => {
            run_plan(travelers, &start_date, budget, &interests)?;
        }
    }
    Ok(())
}
