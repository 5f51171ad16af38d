//! User repository for database operations.

use domain::models::user::NewUser;
use sqlx::SqlitePool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user profile database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users ordered by name.
    pub async fn list(&self) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_users");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, avatar, color
            FROM users
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new user. Fails with a unique violation if the id is taken.
    pub async fn create(&self, user: &NewUser) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, avatar, color)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.avatar)
        .bind(&user.color)
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|_| ())
    }

    /// Delete a user (and, through the foreign key, their logs).
    ///
    /// Returns false when no user had this id.
    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_user");
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected() > 0)
    }
}
