//! CLI tool that polls the backend fleet roster and prints the cache.

use clap::Parser;
use delivery_cli::display;
use delivery_tracker::{run_roster_loop, RosterCache, TrackerClient, TrackerConfig};
use std::time::Duration;
use tokio::time;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Watch the delivery fleet roster
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Delivery backend URL (overrides DELIVERY_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Poll interval in milliseconds (overrides DELIVERY_POLL_MS)
    #[arg(long)]
    poll_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delivery_tracker=debug".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = TrackerConfig::from_env();
    if let Some(url) = args.url {
        config.base_url = url;
    }
    if let Some(poll_ms) = args.poll_ms {
        config.poll_interval = Duration::from_millis(poll_ms);
    }

    tracing::info!("Polling fleet roster at {}", config.base_url);

    let cache = RosterCache::new();
    let client = TrackerClient::new(&config);
    tokio::spawn(run_roster_loop(cache.clone(), client, config.clone()));

    let mut ticker = time::interval(config.poll_interval);
    loop {
        ticker.tick().await;

        let mut roster = cache.snapshot();
        roster.sort_by_key(|drone| drone.drone_id);

        println!("--- fleet ({} drones) ---", roster.len());
        for drone in roster {
            let position = drone
                .current_location
                .map(|loc| display::coord(loc.lat, loc.lng))
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "#{:<4} {:<16} {:<20} bat {:>5.1}% {} alerts {}",
                drone.drone_id,
                drone.drone_name,
                drone.current_status.to_string(),
                drone.battery_level,
                position,
                drone.active_alerts,
            );
        }
    }
}
