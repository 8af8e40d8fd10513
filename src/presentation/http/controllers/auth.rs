// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RefreshSessionCommand, RegisterUserCommand},
    dto::UserDto,
};
use crate::presentation::http::{
    cookies::{REFRESH_TOKEN_COOKIE, clear_session_cookies, set_session_cookies},
    envelope::ApiResponse,
    error::{HttpResult, IntoHttpResult},
    extractors::Authenticated,
    state::HttpState,
};
use axum::{Extension, Json, extract::Multipart, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use super::multipart::FormData;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user: UserDto,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Multipart registration: text fields plus an `avatar` file (required) and
/// an optional `coverImage` file. Uploads happen before the command runs;
/// the session manager only sees the resulting references.
pub async fn register(
    Extension(state): Extension<HttpState>,
    multipart: Multipart,
) -> HttpResult<ApiResponse<UserDto>> {
    let form = FormData::read(multipart).await?;
    let media_store = state.services.media_store();

    let avatar = form.upload_file("avatar", &media_store).await?;
    let cover_image = form.upload_file("coverImage", &media_store).await?;

    let command = RegisterUserCommand {
        full_name: form.field("fullName"),
        email: form.field("email"),
        username: form.field("username"),
        password: form.field("password"),
        avatar,
        cover_image,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created(user, "user registered successfully"))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<impl IntoResponse> {
    let command = LoginUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    let jar = set_session_cookies(
        jar,
        &result.tokens.access_token,
        &result.tokens.refresh_token,
    );

    let data = SessionData {
        user: result.user,
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
    };

    Ok((jar, ApiResponse::ok(data, "user logged in successfully")))
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    jar: CookieJar,
) -> HttpResult<impl IntoResponse> {
    state
        .services
        .user_commands
        .logout(&actor)
        .await
        .into_http()?;

    let jar = clear_session_cookies(jar);
    Ok((
        jar,
        ApiResponse::ok(serde_json::json!({}), "user logged out successfully"),
    ))
}

/// The incoming refresh token is read from the cookie jar first, then the
/// JSON body.
pub async fn refresh_token(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    payload: Option<Json<RefreshRequest>>,
) -> HttpResult<impl IntoResponse> {
    let from_cookie = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_owned());
    let from_body = payload.and_then(|Json(body)| body.refresh_token);

    let command = RefreshSessionCommand {
        refresh_token: from_cookie.or(from_body),
    };

    let tokens = state
        .services
        .user_commands
        .refresh_session(command)
        .await
        .into_http()?;

    let jar = set_session_cookies(jar, &tokens.access_token, &tokens.refresh_token);

    let data = TokenData {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    };

    Ok((jar, ApiResponse::ok(data, "access token refreshed")))
}
