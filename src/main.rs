// Main entry point - Dependency injection and a one-shot dashboard cycle
use std::sync::Arc;

use anyhow::Context;
use temperature_dashboard::application::controller::DashboardController;
use temperature_dashboard::infrastructure::config::load_dashboard_config;
use temperature_dashboard::infrastructure::file_groups::FileGroupStore;
use temperature_dashboard::infrastructure::headless::HeadlessSurface;
use temperature_dashboard::infrastructure::http_feed::HttpReadingsFeed;
use temperature_dashboard::presentation::controls::stat_lines;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,temperature_dashboard=debug".into()),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;

    // Create adapters (infrastructure layer)
    let feed = Arc::new(HttpReadingsFeed::new(
        config.feed.url.clone(),
        config.feed.timeout_secs,
    )?);
    let group_store = Arc::new(FileGroupStore::new(&config.storage.groups_path));
    let surface = HeadlessSurface::new();

    // Create the controller (application layer) and run one cycle
    let mut controller = DashboardController::new(feed, group_store, Box::new(surface), &config);
    controller.load().await.context("Dashboard load cycle failed")?;

    // Print the stats panel
    let window_label = match controller.active_preset() {
        Some(preset) => preset.token(),
        None => "custom",
    };
    println!("Sensors (window: {})", window_label);
    for line in stat_lines(controller.stats()) {
        let marker = if line.dimmed { " (hidden)" } else { "" };
        println!("  {:<12} {:>8}  {}{}", line.name, line.last, line.range, marker);
    }

    Ok(())
}
