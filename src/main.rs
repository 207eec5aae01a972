use anyhow::Context;
use clap::Parser;
use lora_listings::cards::{self, EMPTY_STATE_MESSAGE, EMPTY_STATE_TITLE};
use lora_listings::config::Config;
use lora_listings::sources::{ApiSource, FileSource, ListingSource};
use lora_listings::{
    featured, normalize_batch, query, FilterSpec, ListingCard, ListingDetail, ListingView,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Query property listings and print display-ready cards
#[derive(Debug, Parser)]
#[command(name = "lora-listings", version)]
struct Args {
    /// URL query string, e.g. "type=rent&location=masaki&max_price=3000000"
    #[arg(short, long, default_value = "")]
    query: String,

    /// Show featured listings instead of running a query
    #[arg(long, conflicts_with = "id")]
    featured: bool,

    /// Featured limit (defaults to LORA_FEATURED_LIMIT)
    #[arg(long)]
    limit: Option<usize>,

    /// Show a single listing's detail page (description and gallery)
    #[arg(long)]
    id: Option<i64>,

    /// Read raw records from a JSON file instead of the API
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print cards as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = Config::from_env()?;

    info!("🏠 Lora Real Estate - Listings");

    let file = args.file.clone().or_else(|| config.listings_file.clone());
    let source: Box<dyn ListingSource> = match file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(ApiSource::new(&config)?),
    };

    info!("Fetching listings from {}...", source.source_name());
    let records = source.fetch().await?;
    let batch =
        normalize_batch(records, config.batch_policy).context("Failed to normalize listings")?;

    if let Some(id) = args.id {
        return print_detail(batch.detail(id), args.json);
    }

    let listings: Vec<ListingView> = if args.featured {
        featured(&batch.listings, args.limit.unwrap_or(config.featured_limit))
    } else {
        let filter = FilterSpec::from_query(&args.query).context("Invalid filter")?;
        query(&batch.listings, &filter)
    };

    let cards = cards::cards(&listings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("{}", EMPTY_STATE_TITLE);
        println!("{}", EMPTY_STATE_MESSAGE);
        return Ok(());
    }

    info!("✅ {} listings\n", cards.len());

    for (i, card) in cards.iter().enumerate() {
        let status = if card.occupied {
            format!("{}, Occupied", card.badge)
        } else {
            card.badge.to_string()
        };
        println!("{}. {} [{}]", i + 1, card.title, status);
        if !card.price_label.is_empty() {
            println!("   {}", card.price_label);
        }
        if !card.location_label.is_empty() {
            println!("   {}", card.location_label);
        }
        if !card.features.is_empty() {
            println!("   {}", card.features.join(" · "));
        }
        if let Some(image) = &card.image_url {
            println!("   Image: {}", image);
        }
        println!("   Details: {}", card.detail_href);
        println!();
    }

    Ok(())
}

fn print_detail(detail: Option<ListingDetail>, json: bool) -> anyhow::Result<()> {
    let Some(detail) = detail else {
        println!("{}", EMPTY_STATE_TITLE);
        println!("{}", EMPTY_STATE_MESSAGE);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let card = ListingCard::from_view(&detail.listing);
    println!("{} [{}]", card.title, card.badge);
    if !card.price_label.is_empty() {
        println!("   {}", card.price_label);
    }
    if !card.location_label.is_empty() {
        println!("   {}", card.location_label);
    }
    if !card.features.is_empty() {
        println!("   {}", card.features.join(" · "));
    }
    if let Some(description) = &detail.description {
        println!();
        println!("{}", description);
    }
    if !detail.gallery.is_empty() {
        println!();
        for image in &detail.gallery {
            match &image.label {
                Some(label) => println!("   {}: {}", label, image.url),
                None => println!("   {}", image.url),
            }
        }
    }

    Ok(())
}
