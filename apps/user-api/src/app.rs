use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::MiddlewareConfig;
use crate::methods::create_user::{__path_create_user, create_user};
use crate::methods::delete_user::{__path_delete_user, delete_user};
use crate::methods::entities::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::methods::get_user_by_id::{__path_get_user_by_id, get_user_by_id};
use crate::methods::get_users::{__path_get_users, get_users};
use crate::methods::health_check::{__path_health_check, health_check};
use crate::methods::update_user::{__path_update_user, update_user};
use crate::methods::routes::{
    OPENAPI_JSON_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH, USERS_BY_ID_PATH, USERS_PATH,
};
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    paths(
        get_users, get_user_by_id, create_user, update_user, delete_user, health_check
    ),
    components(schemas(CreateUserRequest, UpdateUserRequest, UserResponse)),
    tags(
        (name = "users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("rate limiter rejected its configuration")]
    RateLimit,
}

/// Routes and state only; no middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(USERS_PATH, get(get_users).post(create_user))
        .route(
            USERS_BY_ID_PATH,
            get(get_user_by_id).patch(update_user).delete(delete_user),
        )
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .with_state(state)
}

fn cors_layer(config: &MiddlewareConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        HeaderName::from_static(REQUEST_ID_HEADER),
    ];

    if config.allows_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
    }
}

/// Applies everything except rate limiting, which needs peer addresses
/// that only a real listener provides.
///
/// Order (outer to inner): Timeout → CORS → Body Limit → Request ID → Trace → Handler
pub fn apply_middleware(mut app: Router, config: &MiddlewareConfig) -> Router {
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));

    // DefaultBodyLimit replaces axum's 2 MiB extractor cap with the configured one.
    app = app
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(RequestBodyLimitLayer::new(config.max_body_size));

    app = app.layer(cors_layer(config));

    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.request_timeout,
    ))
}

/// Per-client-IP token bucket, outermost layer.
pub fn apply_rate_limit(app: Router, config: &MiddlewareConfig) -> Result<Router, StartupError> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(config.replenish_interval_ms())
            .burst_size(config.rate_limit_burst)
            .finish()
            .ok_or(StartupError::RateLimit)?,
    );

    Ok(app.layer(GovernorLayer {
        config: governor_conf,
    }))
}
