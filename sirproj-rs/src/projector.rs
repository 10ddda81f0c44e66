use chrono::Duration;
use tracing::info;

use crate::{
    date_index::{format_date, parse_date},
    error::{Result, SirError},
    estimate::ParameterEstimator,
    parameters::EpidemicParameters,
    series::SirPoint,
};

pub struct Projector {}

impl Projector {
    /// Returns `history` followed by `extra_days` projected points.
    ///
    /// Parameters are fitted on the trailing `fit_window_days` of `history`,
    /// then each day is stepped from the previous one:
    ///
    /// ```text
    /// S' = floor(S - beta*S*I)
    /// I' = floor(I + beta*S*I - gamma*I)
    /// R' = floor(R + gamma*I)
    /// ```
    ///
    /// Horizons that run past the last date chrono can represent are rejected
    /// with [`SirError::HorizonOutOfRange`] before anything is simulated.
    ///
    /// `history` is left untouched; the result is a new sequence. With
    /// `extra_days == 0` the history is returned as-is without fitting.
    pub fn project(
        history: &[SirPoint],
        extra_days: usize,
        fit_window_days: usize,
    ) -> Result<Vec<SirPoint>> {
        if history.len() < 2 {
            return Err(SirError::InsufficientHistory {
                available: history.len(),
            });
        }
        let mut extended = history.to_vec();
        if extra_days == 0 {
            return Ok(extended);
        }
        let parameters = ParameterEstimator::fit(history, fit_window_days)?;
        extended.extend(Self::simulate(history, parameters, extra_days)?);
        info!(
            history = history.len(),
            extra_days,
            beta = parameters.beta,
            gamma = parameters.gamma,
            "projected"
        );
        Ok(extended)
    }

    /// The projected tail only, starting the day after the last point.
    pub fn simulate(
        history: &[SirPoint],
        parameters: EpidemicParameters,
        extra_days: usize,
    ) -> Result<Vec<SirPoint>> {
        let Some(last) = history.last() else {
            return Err(SirError::InsufficientHistory { available: 0 });
        };
        let mut date =
            parse_date(&last.date).ok_or_else(|| SirError::InvalidDate(last.date.clone()))?;
        let horizon_end = i64::try_from(extra_days)
            .ok()
            .and_then(Duration::try_days)
            .and_then(|span| date.checked_add_signed(span));
        if horizon_end.is_none() {
            return Err(SirError::HorizonOutOfRange { days: extra_days });
        }

        let EpidemicParameters { beta, gamma } = parameters;
        let (mut s, mut i, mut r) = (last.susceptible, last.infectious, last.removed);
        let mut projected = Vec::new();
        for _ in 0..extra_days {
            date = date
                .succ_opt()
                .ok_or(SirError::HorizonOutOfRange { days: extra_days })?;
            let infections = beta * s * i;
            let removals = gamma * i;
            (s, i, r) = (
                (s - infections).floor(),
                (i + infections - removals).floor(),
                (r + removals).floor(),
            );
            projected.push(SirPoint {
                date: format_date(date),
                susceptible: s,
                infectious: i,
                removed: r,
            });
        }
        Ok(projected)
    }
}
