/**
 * CORS Layer
 *
 * Builds the `tower-http` CORS layer from the configured origin list.
 */

use std::time::Duration;

use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::backend::server::config::CorsOrigins;

pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
