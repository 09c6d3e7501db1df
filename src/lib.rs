pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::Config;
pub use db::{init_pool, run_migrations};
pub use error::{StoreError, ValidationError};
pub use models::Account;
pub use routes::create_router;
pub use state::AppState;
