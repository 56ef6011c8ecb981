/*
 * Responsibility
 * - /lectures handler (作成 / 所有者ごとの一覧)
 * - body の bind → 認証済み user_id → service 呼び出し → status/JSON への変換
 * - 認可済みの主体は AuthCtxExtractor で明示的に受け取る
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::lectures::CreateLectureRequest,
        extractors::{AuthCtxExtractor, ValidatedJson},
    },
    error::AppError,
    services::lectures::Lecture,
    state::AppState,
};

/// POST /api/v1/lectures
///
/// - `201 Created`: 作成された lecture
/// - `400 Bad Request`: body 不正 / validation
/// - `409 Conflict`: 同名 lecture が既にある
/// - `500`: service 内部エラー
#[tracing::instrument(skip_all, fields(user_id = auth.user_id))]
pub async fn create_lecture(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    ValidatedJson(req): ValidatedJson<CreateLectureRequest>,
) -> Result<(StatusCode, Json<Lecture>), AppError> {
    let lecture = state.lectures.create(req.into(), auth.user_id).await?;

    Ok((StatusCode::CREATED, Json(lecture)))
}

/// GET /api/v1/lectures
///
/// 呼び出し元が所有する lecture の一覧。0 件でも `[]` を返す。
#[tracing::instrument(skip_all, fields(user_id = auth.user_id))]
pub async fn list_lectures(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
) -> Result<Json<Vec<Lecture>>, AppError> {
    let lectures = state.lectures.list_by_owner(auth.user_id).await?;

    Ok(Json(lectures))
}
