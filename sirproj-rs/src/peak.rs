use crate::series::SirPoint;

/// Highest `infectious` value in the sequence, `None` when it is empty.
/// NaN entries are skipped.
pub fn peak_infectious(sequence: &[SirPoint]) -> Option<f64> {
    sequence
        .iter()
        .map(|point| point.infectious)
        .filter(|value| !value.is_nan())
        .reduce(f64::max)
}

/// The point at which [`peak_infectious`] is reached, earliest on ties.
pub fn peak_point(sequence: &[SirPoint]) -> Option<&SirPoint> {
    let peak = peak_infectious(sequence)?;
    sequence.iter().find(|point| point.infectious == peak)
}
