mod common;
use codecast::Dashboard;
use common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,codecast=debug,codecast_core=debug CODECAST_PROFILE=garbled
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dashboard = Dashboard::builder()
        .with_connector(get_connector())
        .source_timeout(std::time::Duration::from_millis(100))
        .build()?;

    let snapshot = dashboard.load().await;
    println!(
        "{} points, {} failed sources",
        snapshot.series.len(),
        snapshot.failures.len()
    );

    Ok(())
}
