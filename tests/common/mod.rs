//! Router-level test fixtures: service stubs, token minting, request helpers.

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode, get_current_timestamp};
use lecture_api::{
    app::build_router,
    config::{AppEnv, Config, HttpLimits},
    services::{
        auth::AuthService,
        lectures::{Lecture, LectureService, NewLecture, ServiceError, normalize_title},
    },
    state::AppState,
};
use serde::de::DeserializeOwned;
use serde_json::json;

pub const SECRET: &str = "router-test-secret";

pub fn test_config(request_timeout: Duration) -> Config {
    Config {
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        app_env: AppEnv::Development,
        database_url: "postgres://unused".into(),
        database_max_connections: 1,
        cors_allowed_origins: Vec::new(),
        http: HttpLimits {
            request_timeout,
            body_limit_bytes: 64 * 1024,
        },
        jwt_secret_key: SECRET.into(),
        access_token_leeway_seconds: 0,
    }
}

pub fn app_with_timeout(service: Arc<dyn LectureService>, request_timeout: Duration) -> Router {
    let config = test_config(request_timeout);
    let auth = Arc::new(AuthService::new(&config.jwt_secret_key, 0));
    build_router(AppState::new(service, auth), &config)
}

pub fn app(service: Arc<dyn LectureService>) -> Router {
    app_with_timeout(service, Duration::from_secs(5))
}

pub fn token_for(user_id: i64) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &json!({ "user_id": user_id, "exp": get_current_timestamp() + 600 }),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn post_lecture(user_id: i64, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/lectures")
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(user_id)))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_lectures(user_id: i64) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/api/v1/lectures")
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(user_id)))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn lecture(id: i64, title: &str) -> Lecture {
    Lecture {
        id,
        title: title.into(),
        description: None,
        system_prompt: None,
    }
}

// --- stubs ---

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(NewLecture, i64),
    List(i64),
}

/// Returns canned results and records every call.
pub struct StubLectureService {
    create_returns: Result<Lecture, ServiceError>,
    list_returns: Result<Vec<Lecture>, ServiceError>,
    calls: Mutex<Vec<Call>>,
}

impl StubLectureService {
    pub fn returning(created: Lecture, listed: Vec<Lecture>) -> Arc<Self> {
        Arc::new(Self {
            create_returns: Ok(created),
            list_returns: Ok(listed),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: ServiceError) -> Arc<Self> {
        Arc::new(Self {
            create_returns: Err(err.clone()),
            list_returns: Err(err),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LectureService for StubLectureService {
    async fn create(&self, input: NewLecture, user_id: i64) -> Result<Lecture, ServiceError> {
        self.calls.lock().unwrap().push(Call::Create(input, user_id));
        self.create_returns.clone()
    }

    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Lecture>, ServiceError> {
        self.calls.lock().unwrap().push(Call::List(user_id));
        self.list_returns.clone()
    }
}

/// Keeps lectures in memory with the same rules as the PostgreSQL service.
#[derive(Default)]
pub struct InMemoryLectureService {
    rows: Mutex<Vec<(i64, Lecture)>>,
}

#[async_trait]
impl LectureService for InMemoryLectureService {
    async fn create(&self, input: NewLecture, user_id: i64) -> Result<Lecture, ServiceError> {
        let title = normalize_title(&input.title)?;
        let mut rows = self.rows.lock().unwrap();

        if rows
            .iter()
            .any(|(owner, l)| *owner == user_id && l.title == title)
        {
            return Err(ServiceError::Conflict(format!(
                "lecture \"{title}\" already exists"
            )));
        }

        let lecture = Lecture {
            id: rows.len() as i64 + 1,
            title,
            description: input.description,
            system_prompt: input.system_prompt,
        };
        rows.push((user_id, lecture.clone()));
        Ok(lecture)
    }

    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Lecture>, ServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, l)| l.clone())
            .collect())
    }
}

/// Never finishes on its own; reports when the in-flight call is dropped.
#[derive(Default)]
pub struct HangingLectureService {
    pub started: AtomicUsize,
    pub dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl LectureService for HangingLectureService {
    async fn create(&self, _input: NewLecture, _user_id: i64) -> Result<Lecture, ServiceError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let _flag = DropFlag(self.dropped.clone());
        std::future::pending::<()>().await;
        unreachable!()
    }

    async fn list_by_owner(&self, _user_id: i64) -> Result<Vec<Lecture>, ServiceError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let _flag = DropFlag(self.dropped.clone());
        std::future::pending::<()>().await;
        unreachable!()
    }
}
