//! CLI tool that runs one simulated delivery and prints its progress.
//!
//! The simulator itself owns no timer: this binary schedules `tick()` on a
//! fixed interval and stops the loop on the completed tick. The order status
//! timeline runs on its own slower interval, decoupled from the position
//! simulation.

use clap::Parser;
use delivery_cli::display;
use delivery_core::route::generate_route;
use delivery_core::simulator::DroneSimulator;
use delivery_core::timeline::OrderTimeline;
use std::time::Duration;
use tokio::time;

/// Simulate a drone delivery from depot via restaurant to customer
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Order identifier
    #[arg(long, default_value_t = 1)]
    order: u64,

    /// Restaurant latitude
    #[arg(long, default_value_t = 10.7757)]
    restaurant_lat: f64,

    /// Restaurant longitude
    #[arg(long, default_value_t = 106.7004)]
    restaurant_lng: f64,

    /// Customer latitude
    #[arg(long, default_value_t = 10.7820)]
    customer_lat: f64,

    /// Customer longitude
    #[arg(long, default_value_t = 106.7050)]
    customer_lng: f64,

    /// Simulation tick interval in milliseconds
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,

    /// Order timeline stage interval in seconds
    #[arg(long, default_value_t = 8)]
    stage_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let route = generate_route(
        args.restaurant_lat,
        args.restaurant_lng,
        args.customer_lat,
        args.customer_lng,
    );

    println!("Order #{} route:", args.order);
    println!("{}", display::route_summary(&route));
    println!();

    let mut sim = DroneSimulator::new(args.order, route);
    let mut timeline = OrderTimeline::new();
    sim.start();

    println!("[{}] {}", args.order, timeline.stage());

    let mut sim_ticker = time::interval(Duration::from_millis(args.tick_ms));
    let mut stage_ticker = time::interval(Duration::from_secs(args.stage_secs));
    // The first interval tick fires immediately; consume it so the timeline
    // doesn't jump a stage at startup.
    stage_ticker.tick().await;

    let mut tick_count = 0u32;
    loop {
        tokio::select! {
            _ = sim_ticker.tick() => {
                let Some(update) = sim.tick() else {
                    continue;
                };
                tick_count += 1;
                let phase = sim.phase().to_string();
                println!("[{:4}] {}", tick_count, display::tick_line(&update, &phase));

                if update.completed {
                    break;
                }
            }
            _ = stage_ticker.tick() => {
                if timeline.advance() {
                    println!("[{}] {}", args.order, timeline.stage());
                }
            }
        }
    }

    println!();
    println!(
        "Delivery complete after {} ticks at {}",
        tick_count,
        display::coord(sim.current_position().0, sim.current_position().1)
    );
    Ok(())
}
