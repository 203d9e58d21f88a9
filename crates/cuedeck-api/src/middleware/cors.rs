//! CORS layer configuration.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use cuedeck_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// The control panel runs on a separate origin (the Nuxt dev server by
/// default), so credentials are allowed only with an explicit origin list.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [header::AUTHORIZATION, header::CONTENT_TYPE];

    if config.allowed_origins.contains(&"*".to_string()) {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
}
