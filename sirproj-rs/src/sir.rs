use tracing::debug;

use crate::{
    date_index::index_of,
    error::{Result, SirError},
    parameters::Population,
    series::{DailyRecord, SirPoint},
};

/// Turns one feed record into an SIR point.
///
/// `infectious` is the cumulative confirmed count, `removed` is
/// `recovered + deaths` and `susceptible` is what remains of the population.
/// Inconsistent upstream counts are passed through, so any component may come
/// out negative.
pub struct SirDeriver {}

impl SirDeriver {
    pub fn derive(population: Population, record: &DailyRecord) -> Result<SirPoint> {
        let population = population.count().ok_or(SirError::UnknownPopulation)?;
        let field = |value: Option<i64>, field: &'static str| {
            value.ok_or_else(|| SirError::MissingField {
                date: record.date.clone(),
                field,
            })
        };
        let confirmed = field(record.confirmed, "confirmed")?;
        let recovered = field(record.recovered, "recovered")?;
        let deaths = field(record.deaths, "deaths")?;

        let removed = recovered as f64 + deaths as f64;
        Ok(SirPoint {
            date: record.date.clone(),
            susceptible: population as f64 - confirmed as f64 - removed,
            infectious: confirmed as f64,
            removed,
        })
    }

    /// [`SirDeriver::derive`] with failures mapped to [`SirPoint::sentinel`].
    pub fn derive_or_sentinel(population: Population, record: Option<&DailyRecord>) -> SirPoint {
        let Some(record) = record else {
            return SirPoint::sentinel();
        };
        Self::derive(population, record).unwrap_or_else(|err| {
            debug!(date = %record.date, %err, "derivation failed");
            SirPoint::sentinel()
        })
    }

    /// The point for `date` in `series`, or the sentinel when the date is not
    /// present (literal match, see [`index_of`]) or cannot be derived.
    pub fn derive_on(population: Population, series: &[DailyRecord], date: &str) -> SirPoint {
        let record = index_of(series, date).map(|i| &series[i]);
        Self::derive_or_sentinel(population, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive() {
        let record = DailyRecord::new("2020-4-1", 500, 100, 20);
        let point = SirDeriver::derive(Population::Known(10_000), &record).unwrap();
        assert_eq!(point.date, "2020-4-1");
        assert_eq!(point.infectious, 500.0);
        assert_eq!(point.removed, 120.0);
        assert_eq!(point.susceptible, 10_000.0 - 500.0 - 120.0);
    }

    #[test]
    fn test_negative_pass_through() {
        let record = DailyRecord::new("2020-4-1", 80, 30, 0);
        let point = SirDeriver::derive(Population::Known(100), &record).unwrap();
        assert_eq!(point.susceptible, -10.0);
    }

    #[test]
    fn test_unknown_population() {
        let record = DailyRecord::new("2020-4-1", 1, 0, 0);
        assert!(matches!(
            SirDeriver::derive(Population::Unknown, &record),
            Err(SirError::UnknownPopulation)
        ));
        assert!(SirDeriver::derive_or_sentinel(Population::Unknown, Some(&record)).is_sentinel());
    }

    #[test]
    fn test_missing_field() {
        let mut record = DailyRecord::new("2020-4-1", 1, 0, 0);
        record.deaths = None;
        match SirDeriver::derive(Population::Known(100), &record) {
            Err(SirError::MissingField { date, field }) => {
                assert_eq!(date, "2020-4-1");
                assert_eq!(field, "deaths");
            }
            other => panic!("unexpected {other:?}"),
        }
        let population = Population::Known(100);
        assert!(SirDeriver::derive_or_sentinel(population, Some(&record)).is_sentinel());
        assert!(SirDeriver::derive_or_sentinel(population, None).is_sentinel());
    }

    #[test]
    fn test_derive_on() {
        let series = vec![
            DailyRecord::new("2020-4-1", 500, 100, 20),
            DailyRecord::new("2020-4-2", 600, 120, 25),
        ];
        let population = Population::Known(10_000);
        let point = SirDeriver::derive_on(population, &series, "2020-4-2");
        assert_eq!(point.date, "2020-4-2");
        assert_eq!(point.susceptible, 9_255.0);
        assert_eq!(point.infectious, 600.0);
        assert_eq!(point.removed, 145.0);

        assert!(SirDeriver::derive_on(population, &series, "2020-04-02").is_sentinel());
        assert!(SirDeriver::derive_on(population, &series, "2020-4-3").is_sentinel());
        assert!(SirDeriver::derive_on(population, &[], "2020-4-1").is_sentinel());
        assert!(SirDeriver::derive_on(Population::Unknown, &series, "2020-4-1").is_sentinel());
    }
}
