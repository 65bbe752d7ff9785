//! User repository implementation

use sqlx::PgPool;
use crate::models::user::{User, UserRow};
use crate::utils::errors::AssistantError;

const USER_COLUMNS: &str = "id, name, city, country, phone, language, units, is_active, joined_at";

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, user: &User) -> Result<User, AssistantError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (id, name, city, country, phone, language, units, is_active, joined_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.city)
        .bind(&user.country)
        .bind(&user.phone)
        .bind(&user.language)
        .bind(user.units.as_str())
        .bind(user.is_active)
        .bind(user.joined_at)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    /// Find user by Telegram ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AssistantError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Check whether a user row exists
    pub async fn exists(&self, id: i64) -> Result<bool, AssistantError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists.0)
    }

    /// Overwrite every mutable column of a user; the id never changes
    pub async fn update(&self, user: &User) -> Result<User, AssistantError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET name = $2,
                city = $3,
                country = $4,
                phone = $5,
                language = $6,
                units = $7,
                is_active = $8
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.city)
        .bind(&user.country)
        .bind(&user.phone)
        .bind(&user.language)
        .bind(user.units.as_str())
        .bind(user.is_active)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(AssistantError::UserNotFound { user_id: user.id })?
            .try_into()
    }
}
