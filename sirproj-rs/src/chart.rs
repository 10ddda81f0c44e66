use crate::series::SirPoint;

pub const CSV_HEADERS: [&str; 5] = ["date", "susceptible", "infectious", "removed", "projected"];

/// A SIR sequence split into the four parallel arrays a chart consumes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChartSeries {
    pub dates: Vec<String>,
    pub susceptible: Vec<f64>,
    pub infectious: Vec<f64>,
    pub removed: Vec<f64>,
}

impl ChartSeries {
    pub fn from_points(points: &[SirPoint]) -> ChartSeries {
        let mut series = ChartSeries {
            dates: Vec::with_capacity(points.len()),
            susceptible: Vec::with_capacity(points.len()),
            infectious: Vec::with_capacity(points.len()),
            removed: Vec::with_capacity(points.len()),
        };
        for point in points {
            series.dates.push(point.date.clone());
            series.susceptible.push(point.susceptible);
            series.infectious.push(point.infectious);
            series.removed.push(point.removed);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// One row per point for [`CSV_HEADERS`]. Rows at or past `history_len`
    /// are flagged as projected.
    pub fn csv_rows(&self, history_len: usize) -> Vec<Vec<String>> {
        (0..self.len())
            .map(|i| {
                vec![
                    self.dates[i].clone(),
                    self.susceptible[i].to_string(),
                    self.infectious[i].to_string(),
                    self.removed[i].to_string(),
                    (i >= history_len).to_string(),
                ]
            })
            .collect()
    }
}
