use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings read from the environment at start up.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Config {
    pub(crate) port: u16,
    /// Base url of the service that answers `/get_companies`
    pub(crate) companies_api_url: Option<Url>,
    pub(crate) companies_api_timeout: Duration,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };
        let companies_api_url = lookup("COMPANIES_API_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                Url::parse(url.trim())
                    .with_context(|| format!("COMPANIES_API_URL is not a valid url: {url:?}"))
            })
            .transpose()?;
        let timeout_secs = match lookup("COMPANIES_API_TIMEOUT_SECS") {
            Some(secs) => secs.parse::<u64>().with_context(|| {
                format!("COMPANIES_API_TIMEOUT_SECS must be a whole number, got {secs:?}")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            port,
            companies_api_url,
            companies_api_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
