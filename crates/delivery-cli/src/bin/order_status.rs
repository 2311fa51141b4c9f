//! One-shot lookup of an order's stored route and latest tracking fix.

use clap::Parser;
use delivery_cli::display;
use delivery_tracker::{TrackerClient, TrackerConfig};

/// Show the stored route and latest position for an order
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Order identifier
    order: u64,

    /// Delivery backend URL (overrides DELIVERY_API_URL)
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TrackerConfig::from_env();
    if let Some(url) = args.url {
        config.base_url = url;
    }
    let client = TrackerClient::new(&config);

    let route = client.fetch_route(args.order).await?;
    println!("Order #{} route ({} waypoints):", args.order, route.len());
    for wp in &route {
        println!(
            "  {:>3}. {} +{}s",
            wp.sequence,
            display::coord(wp.lat, wp.lng),
            wp.estimated_time_s
        );
    }

    match client.fetch_latest_position(args.order).await? {
        Some(fix) => {
            println!();
            println!(
                "Latest fix: {} at {}",
                display::coord(fix.lat, fix.lng),
                fix.timestamp
            );
            if let Some(battery) = fix.battery_level {
                println!("  battery {:.1}%", battery);
            }
            if let Some(status) = fix.status {
                println!("  status {}", status);
            }
        }
        None => println!("No tracking fixes recorded yet."),
    }

    Ok(())
}
