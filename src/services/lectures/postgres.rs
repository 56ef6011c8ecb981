use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{error::RepoError, lecture_repo};

use super::{Lecture, LectureService, NewLecture, ServiceError, normalize_title};

/// `LectureService` backed by the `lectures` table.
#[derive(Clone, Debug)]
pub struct PgLectureService {
    db: PgPool,
}

impl PgLectureService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

impl From<lecture_repo::LectureRow> for Lecture {
    fn from(row: lecture_repo::LectureRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            system_prompt: row.system_prompt,
        }
    }
}

// 空文字は「未指定」として扱う
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl LectureService for PgLectureService {
    async fn create(&self, input: NewLecture, user_id: i64) -> Result<Lecture, ServiceError> {
        let title = normalize_title(&input.title)?;
        let description = non_blank(input.description);
        let system_prompt = non_blank(input.system_prompt);

        let row = lecture_repo::create(
            &self.db,
            user_id,
            &title,
            description.as_deref(),
            system_prompt.as_deref(),
        )
        .await
        .map_err(|e| match e {
            RepoError::Conflict => {
                ServiceError::Conflict(format!("lecture \"{title}\" already exists"))
            }
            RepoError::Db(err) => {
                tracing::error!(error = ?err, user_id, "lecture_repo::create failed");
                ServiceError::Internal("failed to create lecture".into())
            }
        })?;

        tracing::info!(lecture_id = row.id, user_id, "lecture created");
        Ok(row.into())
    }

    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Lecture>, ServiceError> {
        let rows = lecture_repo::list_by_user(&self.db, user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, user_id, "lecture_repo::list_by_user failed");
                ServiceError::Internal("failed to list lectures".into())
            })?;

        Ok(rows.into_iter().map(Lecture::from).collect())
    }
}
