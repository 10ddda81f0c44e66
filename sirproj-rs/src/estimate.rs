use tracing::{debug, warn};

use crate::{
    error::{Result, SirError},
    parameters::EpidemicParameters,
    series::SirPoint,
};

pub struct ParameterEstimator {}

impl ParameterEstimator {
    /// Averages day-over-day finite differences over the trailing
    /// `window_days` days of `sequence`.
    ///
    /// For each consecutive pair `(S0, I0, R0) -> (S1, I1, R1)`:
    /// `beta = (S0 - S1) / (S0 * I0)` and `gamma = (R1 - R0) / I0`.
    /// `window_days` is clamped into `[2, sequence.len()]`, giving
    /// `window_days - 1` pairs. A zero infectious or susceptible count inside
    /// the window yields [`SirError::NonFiniteParameters`]; a sentinel point
    /// inside the window yields [`SirError::SentinelInWindow`].
    pub fn fit(sequence: &[SirPoint], window_days: usize) -> Result<EpidemicParameters> {
        if sequence.len() < 2 {
            return Err(SirError::InsufficientHistory {
                available: sequence.len(),
            });
        }
        let window = window_days.clamp(2, sequence.len());
        let offset = sequence.len() - window;
        let trailing = &sequence[offset..];
        if let Some(i) = trailing.iter().position(SirPoint::is_sentinel) {
            warn!(position = offset + i, "sentinel point in fit window");
            return Err(SirError::SentinelInWindow {
                position: offset + i,
            });
        }

        let mut beta_sum = 0.0;
        let mut gamma_sum = 0.0;
        for pair in trailing.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            beta_sum += (earlier.susceptible - later.susceptible)
                / (earlier.susceptible * earlier.infectious);
            gamma_sum += (later.removed - earlier.removed) / earlier.infectious;
        }
        let pairs = (window - 1) as f64;
        let parameters = EpidemicParameters {
            beta: beta_sum / pairs,
            gamma: gamma_sum / pairs,
        };

        if !parameters.is_finite() {
            warn!(
                beta = parameters.beta,
                gamma = parameters.gamma,
                "non-finite parameters fitted"
            );
            return Err(SirError::NonFiniteParameters {
                beta: parameters.beta,
                gamma: parameters.gamma,
            });
        }
        debug!(window, beta = parameters.beta, gamma = parameters.gamma, "fitted");
        Ok(parameters)
    }
}
