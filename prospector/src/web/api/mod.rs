mod companies;

use axum::{extract::FromRef, routing::post, Router};
use prospector_app::api::COMPANIES_PATH;

use crate::upstream::CompaniesClient;

pub(crate) use companies::get_companies;

/// Json routes the browser view calls into.
pub(crate) fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Option<CompaniesClient>: FromRef<S>,
{
    Router::new().route(COMPANIES_PATH, post(get_companies))
}
