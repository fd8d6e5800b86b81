mod common;
use codecast::{Dashboard, PLACEHOLDER, format_date, format_number, format_percent};
use codecast_core::format::format_hours;
use common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector (fixture profile from CODECAST_PROFILE).
    let connector = get_connector();

    // 2. Build the dashboard and register the connector.
    let dashboard = Dashboard::builder()
        .with_connector(connector)
        .request_timeout(std::time::Duration::from_secs(2))
        .build()?;

    // 3. Load all sources. Failed sources degrade instead of erroring.
    let snapshot = dashboard.load().await;
    for failure in &snapshot.failures {
        println!("warning: {failure}");
    }

    // 4. Headline stats.
    println!("Total hours:   {}", format_hours(snapshot.stats.total_hours, 1));
    println!("Avg per day:   {}", format_hours(snapshot.stats.avg_per_day, 1));
    println!("Entries:       {}", snapshot.stats.entries);

    // 5. Next forecast.
    match (&snapshot.summary.point, snapshot.summary.display_range()) {
        (Some(next), Some(range)) => {
            println!(
                "Next forecast: {} ~ {}h ({}-{}h), confidence {}",
                format_date(&next.date),
                format_number(&next.hours, 1),
                format_hours(range.min, 1),
                format_hours(range.max, 1),
                format_percent(snapshot.summary.confidence_percent),
            );
        }
        _ => println!("Next forecast: {PLACEHOLDER}"),
    }

    // 6. Chart series.
    if snapshot.is_empty() {
        println!("No data available");
        return Ok(());
    }
    for p in &snapshot.series {
        let band = if p.is_forecast() {
            format!(" [{} - {}]", format_hours(p.min, 1), format_hours(p.max, 1))
        } else {
            String::new()
        };
        println!(
            "{:>14}  {:<8}  {}{band}",
            format_date(&p.date),
            format!("{:?}", p.kind),
            format_hours(p.hours, 2),
        );
    }
    if snapshot.unordered_dates > 0 {
        println!("({} points with unreadable dates shown last)", snapshot.unordered_dates);
    }

    Ok(())
}
