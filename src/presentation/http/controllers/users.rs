// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{ChangePasswordCommand, UpdateAccountCommand, UpdateMediaCommand},
    dto::{ChannelProfileDto, UserDto, WatchHistoryEntryDto},
};
use crate::presentation::http::{
    envelope::ApiResponse,
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::Authenticated,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
};
use serde::Deserialize;

use super::multipart::FormData;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub full_name: Option<String>,
    pub username: Option<String>,
}

pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<ApiResponse<serde_json::Value>> {
    let command = ChangePasswordCommand {
        old_password: payload.old_password,
        new_password: payload.new_password,
        confirm_password: payload.confirm_password,
    };

    state
        .services
        .user_commands
        .change_password(&actor, command)
        .await
        .into_http()?;

    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "password changed successfully",
    ))
}

pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<ApiResponse<UserDto>> {
    state
        .services
        .user_queries
        .get_current_user(&actor)
        .await
        .into_http()
        .map(|user| ApiResponse::ok(user, "current user fetched successfully"))
}

pub async fn update_account(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<UpdateAccountRequest>,
) -> HttpResult<ApiResponse<UserDto>> {
    let command = UpdateAccountCommand {
        full_name: payload.full_name,
        username: payload.username,
    };

    state
        .services
        .user_commands
        .update_account(&actor, command)
        .await
        .into_http()
        .map(|user| ApiResponse::ok(user, "account details updated successfully"))
}

pub async fn update_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    multipart: Multipart,
) -> HttpResult<ApiResponse<UserDto>> {
    let command = read_media_command(&state, multipart, "avatar").await?;

    state
        .services
        .user_commands
        .update_avatar(&actor, command)
        .await
        .into_http()
        .map(|user| ApiResponse::ok(user, "avatar updated successfully"))
}

pub async fn update_cover_image(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    multipart: Multipart,
) -> HttpResult<ApiResponse<UserDto>> {
    let command = read_media_command(&state, multipart, "coverImage").await?;

    state
        .services
        .user_commands
        .update_cover_image(&actor, command)
        .await
        .into_http()
        .map(|user| ApiResponse::ok(user, "cover image updated successfully"))
}

pub async fn channel_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<ApiResponse<ChannelProfileDto>> {
    state
        .services
        .user_queries
        .get_channel_profile(&actor, &username)
        .await
        .into_http()
        .map(|profile| ApiResponse::ok(profile, "user channel fetched successfully"))
}

pub async fn watch_history(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<ApiResponse<Vec<WatchHistoryEntryDto>>> {
    state
        .services
        .user_queries
        .get_watch_history(&actor)
        .await
        .into_http()
        .map(|history| ApiResponse::ok(history, "watch history fetched successfully"))
}

async fn read_media_command(
    state: &HttpState,
    multipart: Multipart,
    field: &str,
) -> Result<UpdateMediaCommand, HttpError> {
    let form = FormData::read(multipart).await?;
    let media_store = state.services.media_store();
    let asset = form.upload_file(field, &media_store).await?;
    Ok(UpdateMediaCommand { asset })
}
