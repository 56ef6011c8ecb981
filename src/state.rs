/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - lectures: Arc<dyn LectureService>, auth: Arc<AuthService>
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{auth::AuthService, lectures::LectureService};

#[derive(Clone)]
pub struct AppState {
    pub lectures: Arc<dyn LectureService>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(lectures: Arc<dyn LectureService>, auth: Arc<AuthService>) -> Self {
        Self { lectures, auth }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
