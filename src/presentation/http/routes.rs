// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/users/register", post(auth::register))
        .route("/api/v1/users/login", post(auth::login))
        .route("/api/v1/users/logout", post(auth::logout))
        .route("/api/v1/users/refresh-token", post(auth::refresh_token))
        .route("/api/v1/users/change-password", post(users::change_password))
        .route("/api/v1/users/current-user", get(users::current_user))
        .route("/api/v1/users/update-account", patch(users::update_account))
        .route("/api/v1/users/avatar", patch(users::update_avatar))
        .route("/api/v1/users/cover-image", patch(users::update_cover_image))
        .route("/api/v1/users/c/{username}", get(users::channel_profile))
        .route("/api/v1/users/history", get(users::watch_history))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// CORS from the configured origin list. A literal `*` entry yields a
/// permissive layer without credentials; otherwise the listed origins are
/// allowed with credentials so the session cookies flow.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(tower_http::cors::Any);
    }

    layer
        .allow_origin(AllowOrigin::list(parse_origins(allowed_origins)))
        .allow_credentials(true)
}

fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect()
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_keeps_valid_and_drops_unparseable() {
        let parsed = parse_origins(&[
            "http://localhost:3000".to_string(),
            "bad\norigin".to_string(),
        ]);
        assert_eq!(
            parsed,
            vec![HeaderValue::from_static("http://localhost:3000")]
        );
    }

    #[test]
    fn cors_layer_builds_for_wildcard_and_explicit_lists() {
        let _ = cors_layer(&["*".to_string()]);
        let _ = cors_layer(&["http://localhost:3000".to_string()]);
    }
}
