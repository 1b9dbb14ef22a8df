//! Axum routes that server render the finder view and serve the wasm bundle
//! built by cargo-leptos.
#[cfg(not(debug_assertions))]
use axum::http::{header, HeaderValue};
use axum::Router;
use leptos_axum::{file_and_error_handler, generate_route_list, LeptosRoutes};
use prospector_app::{shell, App};
#[cfg(not(debug_assertions))]
use tower_http::set_header::SetResponseHeader;
use tower_http::services::ServeDir;

use crate::web::WebState;

pub(crate) fn create_leptos_app(state: &WebState) -> Router<WebState> {
    let leptos_options = &state.leptos_options;
    let site_root = &leptos_options.site_root;
    let pkg_dir = &leptos_options.site_pkg_dir;

    // The URL path of the generated JS/WASM bundle from cargo-leptos
    let bundle_path = format!("/{pkg_dir}");
    // The filesystem path of the generated JS/WASM bundle from cargo-leptos
    let bundle_filepath = format!("./{site_root}/{pkg_dir}");
    tracing::debug!("site address {}", leptos_options.site_addr);

    let cargo_leptos_service = ServeDir::new(&bundle_filepath);
    #[cfg(not(debug_assertions))]
    let cargo_leptos_service = SetResponseHeader::appending(
        cargo_leptos_service,
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400"),
    );
    tracing::info!("Serving pkg dir: {bundle_filepath}");

    let routes = generate_route_list(App);
    let options = leptos_options.clone();
    Router::new()
        .nest_service(&bundle_path, cargo_leptos_service)
        .leptos_routes(state, routes, move || shell(options.clone()))
        // unknown paths render the app's not found page
        .fallback(file_and_error_handler::<WebState, _>(shell))
}
