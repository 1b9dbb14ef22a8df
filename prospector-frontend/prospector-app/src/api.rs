use prospector_api_types::{result::JsonError, Company, CompanyQuery};

use crate::error::{AppError, AppResult};

pub const COMPANIES_PATH: &str = "/get_companies";

/// Form-urlencoded body for `POST /get_companies`. The prompt is sent as typed, empty or not.
pub fn encode_query(input_prompt: &str) -> AppResult<String> {
    Ok(serde_qs::to_string(&CompanyQuery {
        input_prompt: input_prompt.to_string(),
    })?)
}

/// The body of a successful response must be a list of complete company records.
pub fn parse_companies(body: &str) -> AppResult<Vec<Company>> {
    Ok(serde_json::from_str(body)?)
}

/// Prefers the server's `JsonError` message, falls back to the status reason.
pub fn status_error(status: u16, body: &str, reason: &str) -> AppError {
    let message = serde_json::from_str::<JsonError>(body)
        .map(|error| error.error_message)
        .unwrap_or_else(|_| reason.to_string());
    AppError::Status { status, message }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        /// Lookups are made by the browser, a server render never submits the form.
        pub async fn get_companies(_input_prompt: &str) -> AppResult<Vec<Company>> {
            Err(AppError::Network("company lookups are only made from the browser".to_string()))
        }
    } else {
        pub async fn get_companies(input_prompt: &str) -> AppResult<Vec<Company>> {
            let response = gloo_net::http::Request::post(COMPANIES_PATH)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(encode_query(input_prompt)?)?
                .send()
                .await
                .map_err(|e| {
                    log::error!("Response {e}. {COMPANIES_PATH}");
                    e
                })?;
            let body = response.text().await?;
            if !response.ok() {
                return Err(status_error(response.status(), &body, &response.status_text()));
            }
            parse_companies(&body)
        }
    }
}
