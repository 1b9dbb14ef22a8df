use axum::{extract::State, Form, Json};
use prospector_api_types::{Company, CompanyQuery};
use tracing::instrument;

use crate::upstream::CompaniesClient;
use crate::web::ApiError;

#[instrument(skip(companies))]
pub(crate) async fn get_companies(
    State(companies): State<Option<CompaniesClient>>,
    Form(query): Form<CompanyQuery>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = companies.ok_or(ApiError::UpstreamNotConfigured)?;
    Ok(Json(companies.get_companies(&query).await?))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        routing::post,
        Router,
    };
    use prospector_api_types::{result::JsonError, Company};
    use tower::ServiceExt;
    use url::Url;

    use crate::upstream::test::{fake_lookup, serve_upstream};
    use crate::upstream::CompaniesClient;
    use crate::web::api::routes;

    fn relay(upstream: Option<Url>, timeout: Duration) -> Router {
        let client = upstream.map(|url| CompaniesClient::new(url, timeout));
        routes().with_state(client)
    }

    fn lookup(prompt: &str) -> Request<Body> {
        Request::post("/get_companies")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("input_prompt={prompt}")))
            .unwrap()
    }

    async fn body(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn relays_companies() {
        let url = serve_upstream(fake_lookup()).await;
        let response = relay(Some(url), Duration::from_secs(5))
            .oneshot(lookup("acme"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let companies: Vec<Company> = serde_json::from_slice(&body(response).await).unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Acme");
        assert_eq!(companies[0].linkedin, "https://li.example/acme");
    }

    #[tokio::test]
    async fn empty_prompt_is_forwarded() {
        let url = serve_upstream(fake_lookup()).await;
        let response = relay(Some(url), Duration::from_secs(5))
            .oneshot(lookup(""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, b"[]");
    }

    #[tokio::test]
    async fn upstream_failure_is_bad_gateway() {
        let url = serve_upstream(Router::new().route(
            "/get_companies",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        let response = relay(Some(url), Duration::from_secs(5))
            .oneshot(lookup("acme"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let error: JsonError = serde_json::from_slice(&body(response).await).unwrap();
        assert!(error.error_message.contains("500"));
    }

    #[tokio::test]
    async fn invalid_companies_are_bad_gateway() {
        let url = serve_upstream(Router::new().route(
            "/get_companies",
            post(|| async { r#"{"name": "Acme"}"# }),
        ))
        .await;
        let response = relay(Some(url), Duration::from_secs(5))
            .oneshot(lookup("acme"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn unconfigured_is_unavailable() {
        let response = relay(None, Duration::from_secs(5))
            .oneshot(lookup("acme"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let error: JsonError = serde_json::from_slice(&body(response).await).unwrap();
        assert_eq!(
            error.error_message,
            "Company lookup is not configured on this server"
        );
    }

    #[tokio::test]
    async fn slow_upstream_is_gateway_timeout() {
        let url = serve_upstream(Router::new().route(
            "/get_companies",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "[]"
            }),
        ))
        .await;
        let response = relay(Some(url), Duration::from_millis(50))
            .oneshot(lookup("acme"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
