use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::str::FromStr;

use crate::error::StoreError;
use crate::models::Account;
use crate::validation::validate_account;

/// Initialize database connection pool with recommended pragmas.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(5))
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
}

/// Run database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(include_str!("../migrations/001_create_accounts.sql"))
        .execute(pool)
        .await?;
    sqlx::query(include_str!("../migrations/002_create_favourites.sql"))
        .execute(pool)
        .await?;
    Ok(())
}

// ============================================================================
// Accounts
// ============================================================================

/// Look up an account by email. Exact match: no trimming, case-sensitive.
pub async fn find_account(pool: &SqlitePool, email: &str) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT username, email, phone_no, password FROM accounts WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Insert a new account after validating email, phone and password.
///
/// Checking that the email is free is the caller's job; inserting an email
/// that is already present surfaces as a database error from the primary
/// key constraint.
pub async fn create_account(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    phone_no: &str,
    password: &str,
) -> Result<(), StoreError> {
    validate_account(email, phone_no, password)?;

    sqlx::query("INSERT INTO accounts (username, email, phone_no, password) VALUES (?, ?, ?, ?)")
        .bind(username)
        .bind(email)
        .bind(phone_no)
        .bind(password)
        .execute(pool)
        .await?;

    Ok(())
}

/// Check credentials.
///
/// Returns the account when it exists and the stored password equals the
/// supplied one, `None` otherwise. Absent account and wrong password are
/// indistinguishable to the caller.
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let account = find_account(pool, email).await?;
    Ok(account.filter(|a| a.password == password))
}

/// Overwrite all four account columns.
///
/// Partial updates are not supported: callers pass unchanged values
/// verbatim. When the email changes, favourites rows are renamed to the
/// new email inside the same transaction.
pub async fn update_account(
    pool: &SqlitePool,
    current_email: &str,
    username: &str,
    email: &str,
    phone_no: &str,
    password: &str,
) -> Result<(), StoreError> {
    if find_account(pool, current_email).await?.is_none() {
        return Err(StoreError::AccountNotFound(current_email.to_string()));
    }

    validate_account(email, phone_no, password)?;

    let mut tx = pool.begin().await?;

    sqlx::query(
        "UPDATE accounts SET username = ?, email = ?, phone_no = ?, password = ? WHERE email = ?",
    )
    .bind(username)
    .bind(email)
    .bind(phone_no)
    .bind(password)
    .bind(current_email)
    .execute(&mut *tx)
    .await?;

    if current_email != email {
        rename_favourites_owner(&mut tx, current_email, email).await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Delete an account and all of its favourites in one transaction, so a
/// failure partway leaves no orphaned favourites.
pub async fn delete_account(pool: &SqlitePool, email: &str) -> Result<(), StoreError> {
    if find_account(pool, email).await?.is_none() {
        return Err(StoreError::AccountNotFound(email.to_string()));
    }

    let mut tx = pool.begin().await?;

    delete_all_favourites(&mut tx, email).await?;
    sqlx::query("DELETE FROM accounts WHERE email = ?")
        .bind(email)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

// ============================================================================
// Favourites
// ============================================================================

/// Add a carpark to a user's favourites. Duplicate pairs are allowed.
pub async fn add_favourite(
    pool: &SqlitePool,
    email: &str,
    carpark_no: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO favourites (user_email, carpark_no) VALUES (?, ?)")
        .bind(email)
        .bind(carpark_no)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove every row matching the pair. Removing a pair that was never
/// added is a no-op and still succeeds.
pub async fn remove_favourite(
    pool: &SqlitePool,
    email: &str,
    carpark_no: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM favourites WHERE user_email = ? AND carpark_no = ?")
        .bind(email)
        .bind(carpark_no)
        .execute(pool)
        .await?;
    Ok(())
}

/// Get all favourited carpark numbers for an email, in insertion order.
pub async fn list_favourites(pool: &SqlitePool, email: &str) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT carpark_no FROM favourites WHERE user_email = ? ORDER BY rowid",
    )
    .bind(email)
    .fetch_all(pool)
    .await
}

/// Re-point all favourites of `old_email` at `new_email`. Runs on the
/// caller's transaction as part of an account email change.
pub async fn rename_favourites_owner(
    tx: &mut Transaction<'_, Sqlite>,
    old_email: &str,
    new_email: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE favourites SET user_email = ? WHERE user_email = ?")
        .bind(new_email)
        .bind(old_email)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Remove all favourites of an email. Runs on the caller's transaction as
/// part of account deletion.
pub async fn delete_all_favourites(
    tx: &mut Transaction<'_, Sqlite>,
    email: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM favourites WHERE user_email = ?")
        .bind(email)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
