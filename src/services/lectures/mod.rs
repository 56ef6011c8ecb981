/*!
 * Lecture service
 *
 * Responsibility:
 * - handler から見える唯一の委譲先 (LectureService trait)
 * - 実装 (PostgreSQL) は postgres に閉じ込め、handler は Arc<dyn LectureService> だけを持つ
 *
 * Public API:
 * - LectureService
 * - Lecture / NewLecture
 * - ServiceError
 * - PgLectureService
 */

mod error;
mod postgres;
mod types;

use async_trait::async_trait;

pub use error::ServiceError;
pub use postgres::PgLectureService;
pub use types::{Lecture, NewLecture, normalize_title};

/// Application-service boundary for lectures.
///
/// Implementations must be safe to share across concurrent requests. Callers
/// cancel in-flight work by dropping the returned future (client disconnect,
/// request timeout), so implementations should not spawn detached work that
/// outlives it.
#[async_trait]
pub trait LectureService: Send + Sync {
    /// Create a lecture owned by `user_id`.
    async fn create(&self, input: NewLecture, user_id: i64) -> Result<Lecture, ServiceError>;

    /// All lectures owned by `user_id`, oldest first.
    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Lecture>, ServiceError>;
}
