use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::AuthCtx;

/// Handler で AuthCtx を受け取るための extractor
///
/// middleware が AuthCtx を request.extensions() に insert 済みである前提。
/// 見つからない場合は middleware の掛け忘れ (配線ミス) なので、
/// 何かの user_id で続行せずに 500 で止める。
#[derive(Debug, Clone, Copy)]
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        AuthCtx::from_extensions(&parts.extensions)
            .map(AuthCtxExtractor)
            .map_err(|err| {
                tracing::error!(
                    error = %err,
                    method = %parts.method,
                    uri = %parts.uri,
                    "route is reachable without the auth middleware"
                );
                AppError::internal()
            })
    }
}
