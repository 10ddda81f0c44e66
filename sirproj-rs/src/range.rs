use tracing::{debug, warn};

use crate::{
    date_index::{DateIndex, days_between},
    parameters::Population,
    series::{DailyRecord, DateRange, SirPoint},
    sir::SirDeriver,
};

pub struct RangeExtractor {}

impl RangeExtractor {
    /// SIR points for the inclusive range `start..=end`.
    ///
    /// `series` must already be in chronological order; the index range
    /// between the two endpoints is walked as-is. Returns an empty sequence
    /// when the population is unknown, when `start` falls after `end`, or
    /// when either endpoint is not in the series. A record that cannot be
    /// derived contributes a sentinel point.
    pub fn extract_range(
        population: Population,
        series: &[DailyRecord],
        start: &str,
        end: &str,
    ) -> Vec<SirPoint> {
        Self::extract_range_indexed(population, series, &DateIndex::new(series), start, end)
    }

    /// Same as [`RangeExtractor::extract_range`] with a prebuilt index.
    pub fn extract_range_indexed(
        population: Population,
        series: &[DailyRecord],
        index: &DateIndex,
        start: &str,
        end: &str,
    ) -> Vec<SirPoint> {
        if population == Population::Unknown {
            warn!("population unknown, no range extracted");
            return Vec::new();
        }
        if days_between(start, end) < 0 {
            debug!(start, end, "range start follows end");
            return Vec::new();
        }
        let (Some(first), Some(last)) = (index.position(start), index.position(end)) else {
            debug!(start, end, "range endpoint not in series");
            return Vec::new();
        };
        let Some(records) = series.get(first..=last) else {
            return Vec::new();
        };
        records
            .iter()
            .map(|record| SirDeriver::derive_or_sentinel(population, Some(record)))
            .collect()
    }

    /// Dates of the first and last record.
    pub fn range_endpoints(series: &[DailyRecord]) -> Option<DateRange> {
        let first = series.first()?;
        let last = series.last()?;
        if first.date.is_empty() || last.date.is_empty() {
            return None;
        }
        Some(DateRange {
            start: first.date.clone(),
            end: last.date.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_index::index_of;

    fn series() -> Vec<DailyRecord> {
        vec![
            DailyRecord::new("2020-1-30", 1, 0, 0),
            DailyRecord::new("2020-1-31", 2, 0, 0),
            DailyRecord::new("2020-2-1", 5, 1, 0),
            DailyRecord::new("2020-2-2", 9, 1, 1),
        ]
    }

    #[test]
    fn test_concrete_scenario() {
        let series = vec![
            DailyRecord::new("2020-1-30", 1, 0, 0),
            DailyRecord::new("2020-1-31", 2, 0, 0),
        ];
        let range = RangeExtractor::extract_range(
            Population::Known(10_000_000),
            &series,
            "2020-1-30",
            "2020-1-31",
        );
        assert_eq!(
            range,
            vec![
                SirPoint {
                    date: "2020-1-30".to_string(),
                    susceptible: 9_999_999.0,
                    infectious: 1.0,
                    removed: 0.0,
                },
                SirPoint {
                    date: "2020-1-31".to_string(),
                    susceptible: 9_999_998.0,
                    infectious: 2.0,
                    removed: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_length_matches_indices() {
        let series = series();
        let population = Population::Known(1_000);
        for (start, end) in [
            ("2020-1-30", "2020-2-2"),
            ("2020-1-31", "2020-2-1"),
            ("2020-2-1", "2020-2-1"),
        ] {
            let range = RangeExtractor::extract_range(population, &series, start, end);
            let expected = index_of(&series, end).unwrap() - index_of(&series, start).unwrap() + 1;
            assert_eq!(range.len(), expected);
            assert_eq!(range.first().unwrap().date, start);
            assert_eq!(range.last().unwrap().date, end);
        }
    }

    #[test]
    fn test_empty_ranges() {
        let series = series();
        let population = Population::Known(1_000);
        let extract = |start: &str, end: &str| {
            RangeExtractor::extract_range(population, &series, start, end)
        };
        assert!(extract("2020-2-2", "2020-1-30").is_empty());
        assert!(extract("2020-1-29", "2020-2-2").is_empty());
        assert!(extract("2020-1-30", "2020-02-02").is_empty());
        assert!(extract("", "").is_empty());
        assert!(RangeExtractor::extract_range(population, &[], "2020-1-30", "2020-2-2").is_empty());
        assert!(
            RangeExtractor::extract_range(Population::Unknown, &series, "2020-1-30", "2020-2-2")
                .is_empty()
        );
    }

    #[test]
    fn test_bad_record_becomes_sentinel() {
        let mut series = series();
        series[1].recovered = None;
        let population = Population::Known(1_000);
        let range = RangeExtractor::extract_range(population, &series, "2020-1-30", "2020-2-1");
        assert_eq!(range.len(), 3);
        assert!(!range[0].is_sentinel());
        assert!(range[1].is_sentinel());
        assert!(!range[2].is_sentinel());
    }

    #[test]
    fn test_range_endpoints() {
        assert_eq!(
            RangeExtractor::range_endpoints(&series()),
            Some(DateRange {
                start: "2020-1-30".to_string(),
                end: "2020-2-2".to_string(),
            })
        );
        assert_eq!(RangeExtractor::range_endpoints(&[]), None);

        let malformed = vec![DailyRecord {
            date: String::new(),
            confirmed: None,
            recovered: None,
            deaths: None,
        }];
        assert_eq!(RangeExtractor::range_endpoints(&malformed), None);
    }
}
