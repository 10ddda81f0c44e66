use tracing::warn;

use crate::{
    date_index::{days_between, index_of, pad_date, unpad_date},
    range::RangeExtractor,
    series::{DailyRecord, DateRange},
};

/// Date-picker state for one series.
///
/// Display values are zero-padded; submitted values are unpadded before
/// they reach the core. A submission that does not resolve to a usable range
/// leaves the previous selection in place.
#[derive(Debug, Clone, Default)]
pub struct PresentationController {
    available: Option<DateRange>,
    selection: Option<DateRange>,
}

impl PresentationController {
    pub fn new(series: &[DailyRecord]) -> PresentationController {
        let available = RangeExtractor::range_endpoints(series);
        PresentationController {
            selection: available.clone(),
            available,
        }
    }

    pub fn available(&self) -> Option<&DateRange> {
        self.available.as_ref()
    }

    pub fn selection(&self) -> Option<&DateRange> {
        self.selection.as_ref()
    }

    /// Current selection in padded `YYYY-MM-DD` form.
    pub fn picker_values(&self) -> Option<(String, String)> {
        let selection = self.selection.as_ref()?;
        Some((pad_date(&selection.start)?, pad_date(&selection.end)?))
    }

    pub fn submit(&mut self, series: &[DailyRecord], start: &str, end: &str) -> Option<&DateRange> {
        match Self::resolve(series, start, end) {
            Some(range) => self.selection = Some(range),
            None => warn!(start, end, "unusable date selection, keeping previous"),
        }
        self.selection.as_ref()
    }

    fn resolve(series: &[DailyRecord], start: &str, end: &str) -> Option<DateRange> {
        let start = unpad_date(start)?;
        let end = unpad_date(end)?;
        if days_between(&start, &end) < 0 {
            return None;
        }
        index_of(series, &start)?;
        index_of(series, &end)?;
        Some(DateRange { start, end })
    }
}

pub fn peak_summary(region: &str, peak: Option<f64>, horizon_days: usize) -> String {
    match peak {
        Some(peak) if peak.is_finite() && peak >= 0.0 => format!(
            "Infections in {region} are projected to peak at {peak:.0} \
             within the next {horizon_days} days."
        ),
        _ => format!("Not enough data to project infections in {region}."),
    }
}
