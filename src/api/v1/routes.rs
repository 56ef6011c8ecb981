/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /lectures には auth middleware を route_layer で適用する
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::lectures::{create_lecture, list_lectures};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let lectures = Router::new().route("/lectures", get(list_lectures).post(create_lecture));

    middleware::auth::access::apply(lectures, state)
}
