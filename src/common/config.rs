use std::env;
use std::time::Duration;

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:8000/api/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct PadConfig {
    /// Full URL of the prediction endpoint (POST target)
    pub predict_url: String,
    /// Upper bound on one prediction round trip, so the UI never stays pending
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

impl PadConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; missing or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            predict_url: lookup("DIGIT_PAD_PREDICT_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.predict_url),
            timeout_secs: lookup("DIGIT_PAD_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.timeout_secs),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Route `LOG_LEVEL` into `RUST_LOG` and start env_logger.
pub fn init_logging(config: &PadConfig) {
    env::set_var("RUST_LOG", &config.log_level);
    let _ = env_logger::try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = PadConfig::from_lookup(|_| None);
        assert_eq!(cfg, PadConfig::default());
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let cfg = PadConfig::from_lookup(lookup_from(&[
            ("DIGIT_PAD_PREDICT_URL", " http://example.test/api/predict "),
            ("DIGIT_PAD_TIMEOUT_SECS", "5"),
            ("LOG_LEVEL", "debug"),
        ]));
        assert_eq!(cfg.predict_url, "http://example.test/api/predict");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn bad_timeout_falls_back() {
        let cfg = PadConfig::from_lookup(lookup_from(&[("DIGIT_PAD_TIMEOUT_SECS", "soon")]));
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        let cfg = PadConfig::from_lookup(lookup_from(&[("DIGIT_PAD_TIMEOUT_SECS", "0")]));
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
