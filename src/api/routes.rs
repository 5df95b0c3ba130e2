use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[cfg(not(test))]
use {
    crate::error::Error,
    axum::extract::ConnectInfo,
    std::net::{IpAddr, SocketAddr},
    std::sync::Arc,
    tower_governor::{governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorLayer},
};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;
use crate::error::Result;

/// Create the router with all endpoints
#[cfg_attr(test, allow(unused_variables))]
pub fn create_router(state: AppState, settings: &Settings) -> Result<Router> {
    // Public API routes - read-only, no authentication required
    #[cfg_attr(test, allow(unused_mut))]
    let mut api_routes = Router::new()
        .route("/recommend", get(api_handlers::recommend))
        .route("/allergens", get(api_handlers::list_allergens))
        .route("/stats", get(api_handlers::get_stats))
        .with_state(state.clone());

    // Apply rate limiting only in non-test builds
    // NOTE: the key extractor falls back to 127.0.0.1 when the peer address
    // is unavailable (router not served with connect info). Behind a reverse
    // proxy, switch to a header-based extractor instead.
    #[cfg(not(test))]
    {
        #[derive(Clone, Copy, Debug)]
        struct FallbackIpKeyExtractor;

        impl KeyExtractor for FallbackIpKeyExtractor {
            type Key = IpAddr;

            fn extract<B>(
                &self,
                req: &axum::http::Request<B>,
            ) -> std::result::Result<Self::Key, tower_governor::GovernorError> {
                if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
                    return Ok(addr.ip());
                }

                Ok(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)))
            }
        }

        let burst_size = u32::try_from(settings.server.api_rate_limit.saturating_mul(2))
            .unwrap_or(u32::MAX);
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(FallbackIpKeyExtractor)
                .per_second(settings.server.api_rate_limit)
                .burst_size(burst_size)
                .finish()
                .ok_or_else(|| {
                    Error::Config("Invalid API rate limit configuration".to_string())
                })?,
        );
        let governor_layer = GovernorLayer {
            config: governor_conf,
        };
        api_routes = api_routes.layer(governor_layer);
    }

    let api_routes = api_routes;

    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .route("/ready", get(api_handlers::readiness_check))
        .with_state(state);

    let router = Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            // Request body size limit - the API takes no bodies
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            // CORS - allow all origins for the read-only API
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
