/*
 * Responsibility
 * - lectures テーブル向け SQLx 操作
 * - (user_id, title) の UNIQUE 違反は RepoError::Conflict として返す
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct LectureRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub system_prompt: Option<String>,
}

pub async fn create(
    db: &PgPool,
    user_id: i64,
    title: &str,
    description: Option<&str>,
    system_prompt: Option<&str>,
) -> Result<LectureRow, RepoError> {
    let row = sqlx::query_as::<_, LectureRow>(
        r#"
        INSERT INTO lectures (user_id, title, description, system_prompt)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, title, description, system_prompt
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(description)
    .bind(system_prompt)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

// id 昇順: 変更がなければ何度読んでも同じ順序になる
pub async fn list_by_user(db: &PgPool, user_id: i64) -> Result<Vec<LectureRow>, RepoError> {
    let rows = sqlx::query_as::<_, LectureRow>(
        r#"
        SELECT id, user_id, title, description, system_prompt
        FROM lectures
        WHERE user_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(rows)
}
