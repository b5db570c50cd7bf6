//! Default seed script - fills a running trails service with test data
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! `TRAILS_URL`, `SEED_TRAILS`, `SEED_HISTORY` and `SEED_RNG_SEED` override
//! the defaults.

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let defaults = SeedConfig::default();
    let config = SeedConfig {
        base_url: std::env::var("TRAILS_URL").unwrap_or(defaults.base_url),
        trail_count: env_or("SEED_TRAILS", defaults.trail_count),
        history_count: env_or("SEED_HISTORY", defaults.history_count),
        rng_seed: env_or("SEED_RNG_SEED", defaults.rng_seed),
        ..defaults
    };

    let seeder = ApiSeeder::new(&config.base_url);
    seeder.check_health().await?;
    tracing::info!("Connected to {}", config.base_url);

    let mut rng = StdRng::seed_from_u64(config.rng_seed); // Reproducible data
    let generator = TrailGenerator::with_config(TrailGenConfig {
        metric_fraction: config.metric_fraction,
        fitness: config.fitness,
        ..TrailGenConfig::default()
    });

    let saved = generator.generate_batch(config.trail_count, &mut rng);
    let calculated = generator.generate_batch(config.history_count, &mut rng);

    let trails = seeder.seed_trails(&saved).await;
    let history = seeder.seed_history(&calculated).await;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Saved trails: {} ({} failed)", trails.succeeded, trails.failed);
    tracing::info!("  History entries: {} ({} failed)", history.succeeded, history.failed);

    let mismatched = trails.mismatched + history.mismatched;
    if mismatched > 0 {
        anyhow::bail!("{mismatched} trails were rated differently than expected");
    }

    Ok(())
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
