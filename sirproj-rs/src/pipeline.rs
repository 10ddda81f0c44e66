use tracing::info;

use crate::{
    error::{Result, SirError},
    parameters::{Population, ProjectionConfig},
    peak::peak_infectious,
    projector::Projector,
    range::RangeExtractor,
    series::{DailyRecord, DateRange, SirPoint},
};

/// Historical points followed by the projected tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub history_len: usize,
    pub points: Vec<SirPoint>,
    pub peak_infectious: Option<f64>,
}

impl Forecast {
    pub fn history(&self) -> &[SirPoint] {
        &self.points[..self.history_len]
    }

    pub fn projected(&self) -> &[SirPoint] {
        &self.points[self.history_len..]
    }
}

/// Extracts `range`, projects it forward and reports the peak over both.
pub fn forecast(
    population: Population,
    series: &[DailyRecord],
    range: &DateRange,
    config: &ProjectionConfig,
) -> Result<Forecast> {
    if population == Population::Unknown {
        return Err(SirError::UnknownPopulation);
    }
    let history = RangeExtractor::extract_range(population, series, &range.start, &range.end);
    let points = Projector::project(
        &history,
        config.projection_horizon_days,
        config.fit_window_days,
    )?;
    let peak = peak_infectious(&points);
    info!(
        start = %range.start,
        end = %range.end,
        points = points.len(),
        peak = ?peak,
        "forecast ready"
    );
    Ok(Forecast {
        history_len: history.len(),
        points,
        peak_infectious: peak,
    })
}
