pub mod accounts;
pub mod favourites;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn create_router(state: AppState, frontend_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Account lifecycle
        .route("/signup", post(accounts::signup))
        .route("/login", post(accounts::login))
        .route("/profile/{email}", get(accounts::get_profile))
        .route("/update-profile", post(accounts::update_profile))
        .route("/delete-account/{email}", delete(accounts::delete_account))
        // Favourites
        .route("/add-favourite", post(favourites::add_favourite))
        .route("/remove-favourite", post(favourites::remove_favourite))
        .route("/favourites/{email}", get(favourites::get_favourites))
        // Health check
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
