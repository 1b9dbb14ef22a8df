use axum::extract::FromRef;
use leptos::config::LeptosOptions;

use crate::upstream::CompaniesClient;

#[derive(Clone)]
pub(crate) struct WebState {
    /// `None` when no lookup service is configured
    pub(crate) companies: Option<CompaniesClient>,
    pub(crate) leptos_options: LeptosOptions,
}

impl FromRef<WebState> for Option<CompaniesClient> {
    fn from_ref(input: &WebState) -> Self {
        input.companies.clone()
    }
}

impl FromRef<WebState> for LeptosOptions {
    fn from_ref(input: &WebState) -> Self {
        input.leptos_options.clone()
    }
}
