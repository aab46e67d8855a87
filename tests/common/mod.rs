#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use link_registry::application::services::LinkService;
use link_registry::domain::clock::ManualClock;
use link_registry::domain::entities::{Link, NewLink};
use link_registry::domain::errors::RepositoryError;
use link_registry::domain::repositories::LinkRepository;
use link_registry::infrastructure::persistence::InMemoryLinkRepository;
use link_registry::routes;
use link_registry::state::AppState;
use link_registry::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

pub const BASE_URL: &str = "https://sho.rt";

/// Fixed start time shared by all handler tests.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// Hands out queued codes in order, then falls back to random ones.
#[derive(Default)]
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    fallback: RandomCodeGenerator,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: RandomCodeGenerator::default(),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.generate())
    }
}

/// Repository whose every operation fails with a storage error.
pub struct BrokenRepository;

#[async_trait]
impl LinkRepository for BrokenRepository {
    async fn insert(&self, _new_link: NewLink) -> Result<Link, RepositoryError> {
        Err(RepositoryError::Storage("connection refused".to_string()))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, RepositoryError> {
        Err(RepositoryError::Storage("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<InMemoryLinkRepository>,
    pub clock: ManualClock,
}

pub fn create_test_state(
    codes: &[&str],
    base_url: Option<&str>,
) -> (AppState, Arc<InMemoryLinkRepository>, ManualClock) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let clock = ManualClock::new(t0());

    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        Arc::new(ScriptedGenerator::new(codes)),
        Arc::new(clock.clone()),
    ));
    let state = AppState::new(link_service, base_url.map(str::to_string));

    (state, repository, clock)
}

pub fn create_test_app(codes: &[&str], base_url: Option<&str>) -> TestApp {
    let (state, repository, clock) = create_test_state(codes, base_url);

    let server = TestServer::new(routes::router(state)).unwrap();

    TestApp {
        server,
        repository,
        clock,
    }
}

pub fn create_broken_app() -> TestServer {
    let link_service = Arc::new(LinkService::new(
        Arc::new(BrokenRepository),
        Arc::new(ScriptedGenerator::default()),
        Arc::new(ManualClock::new(t0())),
    ));
    let state = AppState::new(link_service, Some(BASE_URL.to_string()));

    TestServer::new(routes::router(state)).unwrap()
}

/// Stores a link directly, bypassing the HTTP layer.
pub async fn create_test_link(
    repository: &InMemoryLinkRepository,
    code: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
) {
    repository
        .insert(NewLink {
            short_code: code.to_string(),
            long_url: url.to_string(),
            expires_at,
            created_at: t0(),
        })
        .await
        .unwrap();
}
