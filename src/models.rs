use serde::{Deserialize, Serialize};

/// A user account row.
///
/// The password is stored in clear text and the strength rule is enforced
/// at write time only. Serializing an `Account` therefore exposes the
/// password, which the profile and login endpoints rely on.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub phone_no: String,
    pub password: String,
}

/// Request to create a new account.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub phone_no: String,
    pub password: String,
}

/// Request to check credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to overwrite account details.
///
/// `old_email` identifies the account; the remaining fields replace the
/// stored ones wholesale. An empty `password` keeps the stored password.
/// When `current_password` is supplied it must match the stored password.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub old_email: String,
    pub email: String,
    pub username: String,
    pub phone_no: String,
    #[serde(default)]
    pub password: String,
    pub current_password: Option<String>,
}

/// Request body shared by the favourite add/remove endpoints.
#[derive(Debug, Deserialize)]
pub struct FavouriteRequest {
    pub email: String,
    pub carpark_no: String,
}
