//! Retrieval of the raw time series and the population figure.
//!
//! Network and decoding failures are logged and collapse to `None` /
//! [`Population::Unknown`]; the core only runs on data that resolved.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::{
    error::{Result, SirError},
    parameters::Population,
    series::DailyRecord,
};

/// Region name to chronologically ordered daily records.
pub type TimeSeries = HashMap<String, Vec<DailyRecord>>;

pub const DEFAULT_TIMESERIES_URL: &str = "https://pomber.github.io/covid19/timeseries.json";
pub const DEFAULT_POPULATION_URL_BASE: &str = "https://restcountries.eu/rest/v2/name/";

fn default_timeseries_url() -> String {
    DEFAULT_TIMESERIES_URL.to_string()
}

fn default_population_url_base() -> String {
    DEFAULT_POPULATION_URL_BASE.to_string()
}

/// The upstream series is republished daily.
fn default_cache_ttl_secs() -> u64 {
    24 * 60 * 60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_timeseries_url")]
    pub timeseries_url: String,
    #[serde(default = "default_population_url_base")]
    pub population_url_base: String,
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            timeseries_url: default_timeseries_url(),
            population_url_base: default_population_url_base(),
            cache_dir: None,
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl FeedConfig {
    pub fn population_url(&self, region: &str) -> String {
        format!("{}{}", self.population_url_base, region.replace(' ', "%20"))
    }
}

pub fn parse_timeseries(raw: &str) -> Result<TimeSeries> {
    Ok(serde_json::from_str(raw)?)
}

pub fn region_series<'a>(series: &'a TimeSeries, region: &str) -> Result<&'a [DailyRecord]> {
    series
        .get(region)
        .map(Vec::as_slice)
        .ok_or_else(|| SirError::RegionNotFound(region.to_string()))
}

/// `population` of the first lookup result, or [`Population::Unknown`].
pub fn parse_population(data: &Value) -> Population {
    data.as_array()
        .and_then(|results| results.first())
        .and_then(|first| first.get("population"))
        .and_then(Value::as_i64)
        .map_or(Population::Unknown, Population::from_raw)
}

/// JSON response bodies on disk, keyed by the SHA-256 of the URL.
///
/// Entries older than `max_age` or that no longer decode as JSON are
/// refetched. Only bodies that decode are stored.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
    max_age: Duration,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>, max_age: Duration) -> ResponseCache {
        ResponseCache {
            dir: dir.into(),
            max_age,
        }
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }

    pub fn get_or_fetch<F>(&self, url: &str, fetch: F) -> Result<String>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let path = self.path_for(url);
        if let Some(body) = self.fresh_entry(&path) {
            debug!(url, path = %path.display(), "cache hit");
            return Ok(body);
        }
        let body = fetch(url)?;
        if serde_json::from_str::<Value>(&body).is_ok() {
            fs::create_dir_all(&self.dir)?;
            fs::write(&path, &body)?;
        }
        Ok(body)
    }

    fn fresh_entry(&self, path: &Path) -> Option<String> {
        let modified = fs::metadata(path).ok()?.modified().ok()?;
        let age = SystemTime::now().duration_since(modified).unwrap_or_default();
        if age > self.max_age {
            debug!(path = %path.display(), age_secs = age.as_secs(), "cache entry stale");
            return None;
        }
        let body = fs::read_to_string(path).ok()?;
        if serde_json::from_str::<Value>(&body).is_err() {
            warn!(path = %path.display(), "evicting undecodable cache entry");
            let _ = fs::remove_file(path);
            return None;
        }
        Some(body)
    }
}

pub fn http_get(url: &str) -> Result<String> {
    debug!(url, "GET");
    let mut response = ureq::get(url).call()?;
    Ok(response.body_mut().read_to_string()?)
}

pub struct Feed {
    config: FeedConfig,
    cache: Option<ResponseCache>,
}

impl Feed {
    pub fn new(config: FeedConfig) -> Feed {
        let max_age = Duration::from_secs(config.cache_ttl_secs);
        let cache = config
            .cache_dir
            .clone()
            .map(|dir| ResponseCache::new(dir, max_age));
        Feed { config, cache }
    }

    pub fn fetch_text(&self, url: &str) -> Result<String> {
        match &self.cache {
            Some(cache) => cache.get_or_fetch(url, http_get),
            None => http_get(url),
        }
    }

    /// Decoded JSON at `url`, `None` on a bad URL or malformed body.
    pub fn fetch_json(&self, url: &str) -> Option<Value> {
        let decoded = self
            .fetch_text(url)
            .and_then(|body| Ok(serde_json::from_str::<Value>(&body)?));
        decoded
            .map_err(|err| warn!(url, %err, "fetch failed"))
            .ok()
    }

    pub fn timeseries(&self) -> Option<TimeSeries> {
        let value = self.fetch_json(&self.config.timeseries_url)?;
        serde_json::from_value(value)
            .map_err(|err| warn!(%err, "malformed time series"))
            .ok()
    }

    pub fn population(&self, region: &str) -> Population {
        self.fetch_json(&self.config.population_url(region))
            .map_or(Population::Unknown, |data| parse_population(&data))
    }
}

pub fn read_timeseries(path: &Path) -> Result<TimeSeries> {
    parse_timeseries(&fs::read_to_string(path)?)
}

pub fn read_population(path: &Path) -> Result<Population> {
    let data: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(parse_population(&data))
}
