// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::ApplicationError,
    },
    presentation::http::{cookies::ACCESS_TOKEN_COOKIE, state::HttpState},
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Verified caller identity. The access token is taken from the Bearer
/// header first, then the `accessToken` cookie.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing access token".into(),
                ))
            })?;

        let claims = app_state
            .services
            .token_service()
            .verify_access_token(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(AuthenticatedUser::from_claims(&claims)))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
}

fn cookie_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}
