//! User database operations for authentication

use super::AppState;
use crate::auth::model::User;

const COLUMNS: &str =
    "id, email, name, password_hash, refresh_token, created_at, updated_at";

impl AppState {
    /// Get count of users in database
    pub async fn get_user_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
    }

    /// Get user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// Get user by id
    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Get user by refresh token
    pub async fn get_user_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE refresh_token = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(refresh_token)
            .fetch_optional(&self.pool)
            .await
    }

    /// Create new user
    pub async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let sql = format!(
            "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(name)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
    }

    /// Update user's refresh token (invalidates previous sessions)
    pub async fn update_user_refresh_token(
        &self,
        user_id: i32,
        refresh_token: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET refresh_token = $1, updated_at = NOW() WHERE id = $2")
            .bind(refresh_token)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Update profile fields; any `None` leaves the column unchanged.
    pub async fn update_user_profile(
        &self,
        user_id: i32,
        email: Option<&str>,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!(
            "UPDATE users SET \
             email = COALESCE($1, email), \
             name = COALESCE($2, name), \
             password_hash = COALESCE($3, password_hash), \
             updated_at = NOW() \
             WHERE id = $4 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(name)
            .bind(password_hash)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Get all users
    pub async fn get_all_users(&self) -> Result<Vec<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users ORDER BY created_at");
        sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await
    }

    /// Delete user by id
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
