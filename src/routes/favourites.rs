use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db;
use crate::models::FavouriteRequest;
use crate::state::AppState;

/// POST /add-favourite - Add a carpark to a user's favourites.
pub async fn add_favourite(
    State(state): State<AppState>,
    Json(req): Json<FavouriteRequest>,
) -> Response {
    match db::add_favourite(&state.pool, &req.email, &req.carpark_no).await {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Carpark added to favourites!"
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to add favourite: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to add to favourites!" })),
            )
                .into_response()
        }
    }
}

/// POST /remove-favourite - Remove a carpark from a user's favourites.
pub async fn remove_favourite(
    State(state): State<AppState>,
    Json(req): Json<FavouriteRequest>,
) -> Response {
    match db::remove_favourite(&state.pool, &req.email, &req.carpark_no).await {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Carpark removed from favourites!"
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to remove favourite: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to remove from favourites!" })),
            )
                .into_response()
        }
    }
}

/// GET /favourites/{email} - List a user's favourited carparks.
pub async fn get_favourites(State(state): State<AppState>, Path(email): Path<String>) -> Response {
    match db::list_favourites(&state.pool, &email).await {
        Ok(favs) if favs.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "No favourites found!" })),
        )
            .into_response(),
        Ok(favs) => Json(json!({ "success": true, "favourites": favs })).into_response(),
        Err(e) => {
            tracing::error!("Failed to list favourites: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Database error" })),
            )
                .into_response()
        }
    }
}
