use serde::{Deserialize, Serialize};

/// One day of the upstream feed. Dates are `YYYY-M-D` without zero padding.
///
/// Counts are optional so that a feed entry with a missing or null field can
/// still be decoded; derivation turns such an entry into a sentinel point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    #[serde(default)]
    pub confirmed: Option<i64>,
    #[serde(default)]
    pub recovered: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
}

impl DailyRecord {
    pub fn new(date: &str, confirmed: i64, recovered: i64, deaths: i64) -> DailyRecord {
        DailyRecord {
            date: date.to_string(),
            confirmed: Some(confirmed),
            recovered: Some(recovered),
            deaths: Some(deaths),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SirPoint {
    pub date: String,
    pub susceptible: f64,
    pub infectious: f64,
    pub removed: f64,
}

impl SirPoint {
    /// The `("", -1, -1, -1)` point downstream charting checks for.
    pub fn sentinel() -> SirPoint {
        SirPoint {
            date: String::new(),
            susceptible: -1.0,
            infectious: -1.0,
            removed: -1.0,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.date.is_empty()
            && self.susceptible == -1.0
            && self.infectious == -1.0
            && self.removed == -1.0
    }
}

/// Inclusive range of dates in the feed's unpadded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_with_null_field() {
        let record: DailyRecord = serde_json::from_value(json!({
            "date": "2020-3-1",
            "confirmed": 10,
            "deaths": null
        }))
        .unwrap();
        assert_eq!(record.confirmed, Some(10));
        assert_eq!(record.recovered, None);
        assert_eq!(record.deaths, None);
    }

    #[test]
    fn test_sentinel() {
        let point = SirPoint::sentinel();
        assert!(point.is_sentinel());
        assert_eq!(point.date, "");
        assert_eq!(point.susceptible, -1.0);
        assert_eq!(point.infectious, -1.0);
        assert_eq!(point.removed, -1.0);

        let real = SirPoint {
            date: "2020-1-30".to_string(),
            susceptible: -1.0,
            infectious: -1.0,
            removed: -1.0,
        };
        assert!(!real.is_sentinel());
    }
}
