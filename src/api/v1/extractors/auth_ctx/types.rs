/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - extensions は型で引くので「キーはあるが型が違う」状態は起こらない (不在のみ)
 */
use axum::http::Extensions;
use thiserror::Error;

/// 認証済みのリクエストに付与されるコンテキスト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: i64,
}

impl AuthCtx {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }

    /// Typed lookup of the principal the auth middleware attached.
    pub fn from_extensions(extensions: &Extensions) -> Result<Self, AuthCtxError> {
        extensions
            .get::<AuthCtx>()
            .copied()
            .ok_or(AuthCtxError::Missing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthCtxError {
    /// Route reached a handler without passing the auth middleware.
    #[error("authenticated principal missing from request context")]
    Missing,
}
