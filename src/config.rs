use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Prediction endpoint used when `SCORING_API_URL` is not set.
pub const DEFAULT_SCORING_API_URL: &str = "https://ilkan77-openclassroom.hf.space/predict";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub scoring_api_url: String,
    pub scoring_timeout_secs: u64,
    pub reference_data_path: PathBuf,
    pub reference_sample_size: usize,
    pub reference_sample_seed: u64,
    pub session_ttl_secs: u64,
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: {}", name, raw)),
        _ => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            scoring_api_url: std::env::var("SCORING_API_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SCORING_API_URL.to_string()),
            scoring_timeout_secs: parse_var("SCORING_TIMEOUT_SECS", 30)?,
            reference_data_path: std::env::var("REFERENCE_DATA_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("application_train.csv")),
            reference_sample_size: parse_var("REFERENCE_SAMPLE_SIZE", 1000)?,
            reference_sample_seed: parse_var("REFERENCE_SAMPLE_SEED", 42)?,
            session_ttl_secs: parse_var("SESSION_TTL_SECS", 1800)?,
        };
        config.validate()?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Scoring API URL: {}", config.scoring_api_url);
        tracing::debug!(
            "Reference data: {} (sample of {}, seed {})",
            config.reference_data_path.display(),
            config.reference_sample_size,
            config.reference_sample_seed
        );
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Checks invariants that parsing alone does not enforce.
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.scoring_api_url)
            .map_err(|e| anyhow::anyhow!("SCORING_API_URL is not a valid URL: {}", e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("SCORING_API_URL must start with http:// or https://");
        }
        if self.scoring_timeout_secs == 0 {
            anyhow::bail!("SCORING_TIMEOUT_SECS must be greater than zero");
        }
        if self.reference_sample_size == 0 {
            anyhow::bail!("REFERENCE_SAMPLE_SIZE must be greater than zero");
        }
        if self.session_ttl_secs == 0 {
            anyhow::bail!("SESSION_TTL_SECS must be greater than zero");
        }
        Ok(())
    }

    pub fn scoring_timeout(&self) -> Duration {
        Duration::from_secs(self.scoring_timeout_secs)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            port: 3000,
            scoring_api_url: DEFAULT_SCORING_API_URL.to_string(),
            scoring_timeout_secs: 30,
            reference_data_path: PathBuf::from("application_train.csv"),
            reference_sample_size: 1000,
            reference_sample_seed: 42,
            session_ttl_secs: 1800,
        }
    }

    #[test]
    fn default_values_are_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let mut c = config();
        c.scoring_api_url = "ftp://example.com/predict".to_string();
        assert!(c.validate().is_err());
        c.scoring_api_url = "not a url".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut c = config();
        c.scoring_timeout_secs = 0;
        assert!(c.validate().is_err());
    }
}
