use std::time::Duration;

use prospector_api_types::{Company, CompanyQuery};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Longest piece of an upstream error body passed on to the browser.
const ERROR_EXCERPT_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Company lookup returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Company lookup sent an invalid company list: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Company lookup did not answer within {0:?}")]
    Timeout(Duration),
}

/// Client for the service that turns a prompt into a list of companies.
#[derive(Clone, Debug)]
pub struct CompaniesClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl CompaniesClient {
    const COMPANIES_PATH: &'static str = "get_companies";

    pub fn new(mut base_url: Url, timeout: Duration) -> Self {
        // joining onto `http://host/api` would otherwise replace the `api` segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        CompaniesClient {
            client: Client::new(),
            base_url,
            timeout,
        }
    }

    pub fn companies_url(&self) -> Result<Url, UpstreamError> {
        Ok(self.base_url.join(Self::COMPANIES_PATH)?)
    }

    /// Forwards the prompt as a form and checks the answer against the company schema.
    pub async fn get_companies(&self, query: &CompanyQuery) -> Result<Vec<Company>, UpstreamError> {
        let url = self.companies_url()?;
        info!("Looking up companies: {url}");
        let request = async {
            let response = self.client.post(url).form(query).send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, UpstreamError>((status, body))
        };
        let (status, body) = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout))??;
        if !status.is_success() {
            warn!("company lookup returned {status}: {body}");
            return Err(UpstreamError::Status {
                status,
                body: excerpt(&body),
            });
        }
        let companies: Vec<Company> = serde_json::from_str(&body)?;
        debug!("company lookup returned {} companies", companies.len());
        Ok(companies)
    }
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(ERROR_EXCERPT_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
