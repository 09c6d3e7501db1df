use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db;
use crate::error::StoreError;
use crate::models::{LoginRequest, SignupRequest, UpdateProfileRequest};
use crate::state::AppState;

/// POST /signup - Register a new account.
pub async fn signup(State(state): State<AppState>, Json(req): Json<SignupRequest>) -> Response {
    // Check if the email is already taken
    match db::find_account(&state.pool, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": "Email already exists!" })),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check for existing account: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to create account!" })),
            )
                .into_response();
        }
    }

    match db::create_account(
        &state.pool,
        &req.username,
        &req.email,
        &req.phone_no,
        &req.password,
    )
    .await
    {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Account created successfully!"
        }))
        .into_response(),
        Err(StoreError::Validation(e)) => {
            tracing::warn!("Rejected signup for {}: {}", req.email, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to create account!" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create account: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to create account!" })),
            )
                .into_response()
        }
    }
}

/// POST /login - Check credentials and return the account.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match db::authenticate(&state.pool, &req.email, &req.password).await {
        Ok(Some(account)) => Json(json!({ "success": true, "user": account })).into_response(),
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid email or password" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to check credentials: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Database error" })),
            )
                .into_response()
        }
    }
}

/// GET /profile/{email} - Fetch account details.
pub async fn get_profile(State(state): State<AppState>, Path(email): Path<String>) -> Response {
    match db::find_account(&state.pool, &email).await {
        Ok(Some(account)) => Json(json!({ "success": true, "user": account })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "User not found." })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch profile: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Database error" })),
            )
                .into_response()
        }
    }
}

/// POST /update-profile - Overwrite account details.
///
/// Renames the account's favourites when the email changes. An empty
/// password in the request keeps the stored password.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Response {
    let user = match db::find_account(&state.pool, &req.old_email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "success": false, "message": "User not found!" })),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to look up account: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to update profile!" })),
            )
                .into_response();
        }
    };

    // Verify the current password when the client supplies it
    if let Some(current) = &req.current_password {
        if *current != user.password {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Current password is incorrect!" })),
            )
                .into_response();
        }
    }

    // A changed email must not collide with another account
    if req.email != req.old_email {
        match db::find_account(&state.pool, &req.email).await {
            Ok(Some(_)) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "message": "Email already in use!" })),
                )
                    .into_response();
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Failed to check for existing account: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to update profile!" })),
                )
                    .into_response();
            }
        }
    }

    // Empty password means keep the stored one
    let password = if req.password.is_empty() {
        user.password
    } else {
        req.password.clone()
    };

    match db::update_account(
        &state.pool,
        &req.old_email,
        &req.username,
        &req.email,
        &req.phone_no,
        &password,
    )
    .await
    {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Profile updated successfully!",
            "email": req.email,
            "username": req.username,
            "phone_no": req.phone_no,
        }))
        .into_response(),
        Err(StoreError::Validation(e)) => {
            tracing::warn!("Rejected profile update for {}: {}", req.old_email, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to update profile!" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update profile: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to update profile!" })),
            )
                .into_response()
        }
    }
}

/// DELETE /delete-account/{email} - Remove an account and its favourites.
pub async fn delete_account(State(state): State<AppState>, Path(email): Path<String>) -> Response {
    match db::delete_account(&state.pool, &email).await {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Account deleted successfully!"
        }))
        .into_response(),
        Err(StoreError::AccountNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "User not found!" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete account: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to delete account!" })),
            )
                .into_response()
        }
    }
}
