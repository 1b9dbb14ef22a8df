#![recursion_limit = "256"]

mod config;
mod leptos;
mod upstream;
mod web;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::upstream::CompaniesClient;
use crate::web::{start_web, WebState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env()?;
    // the crate root `leptos` module shadows the crate name here
    let conf = ::leptos::config::get_configuration(None)?;
    let companies = match config.companies_api_url.clone() {
        Some(url) => {
            info!("relaying company lookups to {url}");
            Some(CompaniesClient::new(url, config.companies_api_timeout))
        }
        None => {
            warn!("COMPANIES_API_URL is not set, /get_companies will answer 503");
            None
        }
    };
    let state = WebState {
        companies,
        leptos_options: conf.leptos_options,
    };
    start_web(state, config.port).await
}
