//! access token (HS256 JWT) 検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` を必須とする
//! - 署名 + exp を検証し、`user_id` claim を `AuthCtx.user_id` として extensions に格納する
//! - 失敗時は 401 (handler には到達しない)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// 認証が必要な Router に middleware を適用する。
///
/// 例：
/// ```ignore
/// let lectures = middleware::auth::access::apply(lectures, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

/// Split `Authorization` into the bearer token. The scheme is case-insensitive.
fn bearer_token(value: &str) -> Result<&str, AppError> {
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::unauthorized("invalid authentication scheme"))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::unauthorized("invalid authentication scheme"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::unauthorized("invalid token"));
    }
    Ok(token)
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("authorization header is missing"))?
        .to_str()
        .map_err(|_| AppError::unauthorized("invalid authentication scheme"))?;

    let token = bearer_token(auth)?;

    let verified = match state.auth.verify_verified(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::unauthorized("invalid token"));
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(verified.user_id));

    Ok(next.run(req).await)
}
