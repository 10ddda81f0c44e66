pub mod input;

use anyhow::{Context, Result};
use sirproj::{
    Environment, Population,
    chart::{CSV_HEADERS, ChartSeries},
    controller::{PresentationController, peak_summary},
    feed::{self, Feed},
    peak::peak_point,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use input::RunInput;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Environment::<RunInput>::load().context("failed to read run description")?;
    let input = ctx.input.as_ref().context("missing input section")?;
    info!(region = %input.region, seed = ctx.seed, replicate = ctx.replicate, "run started");
    let source = Feed::new(input.feed.clone());

    // Local files replace the network feed when provided
    let timeseries = match ctx.file("timeseries") {
        Some(path) => feed::read_timeseries(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => source.timeseries().context("time series unavailable")?,
    };
    let population = match ctx.file("population") {
        Some(path) => feed::read_population(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => source.population(&input.region),
    };
    if let Population::Known(count) = population {
        info!(region = %input.region, count, "population resolved");
    }

    let series = feed::region_series(&timeseries, &input.region)?;
    let mut controller = PresentationController::new(series);
    let available = controller
        .available()
        .cloned()
        .context("time series is empty")?;
    controller.submit(
        series,
        input.start.as_deref().unwrap_or(&available.start),
        input.end.as_deref().unwrap_or(&available.end),
    );
    let range = controller
        .selection()
        .cloned()
        .context("no usable date range")?;

    let forecast = sirproj::forecast(population, series, &range, &input.projection)?;

    let chart = ChartSeries::from_points(&forecast.points);
    ctx.write_csv(
        "sir_output.csv",
        &CSV_HEADERS,
        &chart.csv_rows(forecast.history_len),
    )?;

    if let Some(peak) = peak_point(&forecast.points) {
        info!(date = %peak.date, infectious = peak.infectious, "peak");
    }
    info!(
        "{}",
        peak_summary(
            &input.region,
            forecast.peak_infectious,
            input.projection.projection_horizon_days
        )
    );
    Ok(())
}
