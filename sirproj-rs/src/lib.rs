//! Daily SIR decomposition of one region's outbreak curve and its forward
//! projection from parameters fitted on recent history.
//!
//! The numeric core ([`date_index`], [`sir`], [`range`], [`estimate`],
//! [`projector`], [`peak`]) is synchronous and holds no state between calls.
//! [`feed`], [`environment`], [`chart`] and [`controller`] are the I/O and
//! presentation edges around it.

pub mod chart;
pub mod controller;
pub mod date_index;
pub mod environment;
pub mod error;
pub mod estimate;
pub mod feed;
pub mod parameters;
pub mod peak;
pub mod pipeline;
pub mod projector;
pub mod range;
pub mod series;
pub mod sir;

pub use environment::Environment;
pub use error::{Result, SirError};
pub use estimate::ParameterEstimator;
pub use parameters::{EpidemicParameters, Population, ProjectionConfig};
pub use pipeline::{Forecast, forecast};
pub use projector::Projector;
pub use range::RangeExtractor;
pub use series::{DailyRecord, DateRange, SirPoint};
pub use sir::SirDeriver;
