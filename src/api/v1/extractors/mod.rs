/*
 * Responsibility
 * - handler が受け取る型付き入力 (認証済み主体 / 検証済み body)
 */
pub mod auth_ctx;
pub mod validated_json;

pub use auth_ctx::{AuthCtx, AuthCtxError, AuthCtxExtractor};
pub use validated_json::{Validate, ValidatedJson};
