use thiserror::Error;

pub type Result<T> = std::result::Result<T, SirError>;

#[derive(Debug, Error)]
pub enum SirError {
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("record for {date:?} is missing field `{field}`")]
    MissingField { date: String, field: &'static str },

    #[error("population is unknown")]
    UnknownPopulation,

    #[error("insufficient history to fit parameters: {available} point(s), need at least 2")]
    InsufficientHistory { available: usize },

    #[error("insufficient data to project: fitted beta={beta}, gamma={gamma}")]
    NonFiniteParameters { beta: f64, gamma: f64 },

    #[error("fit window contains an underived point at position {position}")]
    SentinelInWindow { position: usize },

    #[error("projection horizon of {days} days runs past the representable calendar")]
    HorizonOutOfRange { days: usize },

    #[error("region {0:?} not present in time series")]
    RegionNotFound(String),

    #[error("no input on stdin")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Http(#[from] ureq::Error),
}
