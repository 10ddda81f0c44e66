use serde::Deserialize;
use sirproj::{ProjectionConfig, feed::FeedConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct RunInput {
    pub region: String,
    /// Either `YYYY-M-D` or zero-padded; defaults to the series bounds.
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[cfg(test)]
mod test {
    use super::RunInput;

    #[test]
    fn test_minimal_input() {
        let input: RunInput = parse_input(r#"{"region": "Sweden"}"#);
        assert_eq!(input.region, "Sweden");
        assert_eq!(input.start, None);
        assert_eq!(input.projection.projection_horizon_days, 365);
        assert_eq!(input.projection.fit_window_days, 30);
        assert_eq!(input.feed.cache_dir, None);
    }

    #[test]
    fn test_overrides() {
        let input: RunInput = parse_input(
            r#"{
                "region": "Sweden",
                "start": "2020-03-01",
                "projection": { "fit_window_days": 7 },
                "feed": { "cache_dir": "cache" }
            }"#,
        );
        assert_eq!(input.start.as_deref(), Some("2020-03-01"));
        assert_eq!(input.projection.projection_horizon_days, 365);
        assert_eq!(input.projection.fit_window_days, 7);
        assert_eq!(input.feed.cache_dir.unwrap().to_str(), Some("cache"));
    }

    fn parse_input(raw: &str) -> RunInput {
        let ctx = sirproj::Environment::from_reader(format!(r#"{{"input": {raw}}}"#).as_bytes())
            .unwrap()
            .with_input_type::<RunInput>()
            .unwrap();
        ctx.input.unwrap()
    }
}
