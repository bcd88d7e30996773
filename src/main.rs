//! Policy Cache demo
//!
//! Fetches Star Wars characters through the cache, then fetches a few again to
//! show them being served without a network round trip.

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::fetch::{DataFetcher, SwapiClient};
use policy_cache::models::describe;
use policy_cache::{fetch_through, Cache, Config, SharedCache};

/// Main entry point for the cache demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache and the API client
/// 4. Fetch ids `1..=fetch_count`, then re-fetch `1..=refetch_count`
/// 5. Print final statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, policy={}, api={}, fetch_count={}, refetch_count={}",
        config.capacity,
        config.policy,
        config.api_base_url,
        config.fetch_count,
        config.refetch_count
    );

    let cache = config.build_cache().context("invalid cache configuration")?;
    let client = SwapiClient::new(&config.api_base_url, config.request_timeout())
        .context("failed to build HTTP client")?;

    for id in 1..=config.fetch_count {
        show_character(&cache, &client, id).await;
        println!("Cache size: {}\n", cache.count());
    }

    println!("--- Re-fetching first {} characters ---\n", config.refetch_count);
    for id in 1..=config.refetch_count {
        show_character(&cache, &client, id).await;
    }

    let stats = cache.stats();
    info!(hit_rate = stats.hit_rate(), "Demo complete");
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("failed to serialize stats")?
    );

    Ok(())
}

async fn show_character<F: DataFetcher>(cache: &SharedCache, fetcher: &F, id: u32) {
    let id = id.to_string();
    match fetch_through(cache, fetcher, &id).await {
        Ok(lookup) => {
            let source = if lookup.is_hit() { "CACHE HIT" } else { "CACHE MISS" };
            println!("[{}] Character {}: {}", source, id, describe(lookup.value()));
        }
        Err(err) => warn!(id = %id, error = %err, "Failed to fetch character"),
    }
}
