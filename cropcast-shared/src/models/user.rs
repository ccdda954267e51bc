/// User model and store operations
///
/// One row per account. The `id` is assigned by the store at creation and
/// never changes; the password is held only as an Argon2id hash and is never
/// serialized into responses.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     first_name VARCHAR(255) NOT NULL,
///     last_name VARCHAR(255) NOT NULL,
///     email CITEXT NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     last_login_at TIMESTAMPTZ
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4), assigned by the store, immutable
    pub id: Uuid,

    /// Given name, non-empty
    pub first_name: String,

    /// Family name, non-empty
    pub last_name: String,

    /// Email address (case-insensitive via CITEXT), unique across users
    pub email: String,

    /// Argon2id password hash
    ///
    /// Never leaves the server: skipped during serialization so no response
    /// body can carry it.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,

    /// When the user last logged in (None if never)
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// The user's display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,

    /// Email address; the store's unique constraint rejects duplicates
    pub email: String,

    /// Argon2id password hash (never the plaintext)
    pub password_hash: String,
}

/// Sparse update for the profile endpoint.
///
/// The three identity fields are always written; `password_hash` is written
/// only when present. Columns without a field here are never touched by the
/// update, so a request that omits the password cannot clear the stored
/// hash.
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// New hash to store, or None to leave the existing hash as-is
    pub password_hash: Option<String>,
}

impl User {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the email already exists (unique constraint) or
    /// the store call fails.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, password_hash,
                      created_at, updated_at, last_login_at
            "#,
        )
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID. Returns None if no such user exists.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password_hash,
                   created_at, updated_at, last_login_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address (case-insensitive via CITEXT).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password_hash,
                   created_at, updated_at, last_login_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Applies a sparse profile update keyed by id.
    ///
    /// Writes the identity fields, and the password hash only when
    /// `data.password_hash` is present. Returns the updated record, or None
    /// if no user has this id. A write whose values equal the stored ones
    /// still counts as found — the `RETURNING` row distinguishes a missing
    /// id from an unchanged record.
    ///
    /// # Errors
    ///
    /// Returns an error if the new email collides with another user's
    /// (unique constraint) or the store call fails.
    pub async fn update_profile(
        pool: &PgPool,
        id: Uuid,
        data: UpdateProfile,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Two statements instead of one dynamically assembled string: the
        // only optional column is the hash.
        let user = match data.password_hash {
            Some(password_hash) => {
                sqlx::query_as::<_, User>(
                    r#"
                    UPDATE users
                    SET updated_at = NOW(),
                        first_name = $2,
                        last_name = $3,
                        email = $4,
                        password_hash = $5
                    WHERE id = $1
                    RETURNING id, first_name, last_name, email, password_hash,
                              created_at, updated_at, last_login_at
                    "#,
                )
                .bind(id)
                .bind(data.first_name)
                .bind(data.last_name)
                .bind(data.email)
                .bind(password_hash)
                .fetch_optional(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, User>(
                    r#"
                    UPDATE users
                    SET updated_at = NOW(),
                        first_name = $2,
                        last_name = $3,
                        email = $4
                    WHERE id = $1
                    RETURNING id, first_name, last_name, email, password_hash,
                              created_at, updated_at, last_login_at
                    "#,
                )
                .bind(id)
                .bind(data.first_name)
                .bind(data.last_name)
                .bind(data.email)
                .fetch_optional(pool)
                .await?
            }
        };

        Ok(user)
    }

    /// Touches the last-login timestamp after a successful authentication.
    pub async fn update_last_login(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET last_login_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            password_hash: "$argon2id$v=19$m=65536,t=3,p=4$salt$hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "Jane Doe");
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["first_name"], "Jane");
        assert_eq!(json["email"], "jane@x.com");
    }

    #[test]
    fn test_update_profile_without_password() {
        let update = UpdateProfile {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            password_hash: None,
        };

        assert!(update.password_hash.is_none());
    }

    // Store round-trips are exercised in the API crate's integration suite
    // against a real database.
}
