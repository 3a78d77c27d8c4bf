//! Test utilities: an in-memory store and a router harness
//!
//! `MemoryStore` mirrors the Postgres schema's behavior: foreign keys on
//! author/user/competition, the unique (user, competition) pair, cascade on
//! competition delete, and NULL scores sorting first.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, LOCATION},
        Method, Request, StatusCode,
    },
    Router,
};
use tower::ServiceExt;

use crate::{
    config::{Config, DatabaseConfig, JwtConfig, ServerConfig},
    constants::{messages, roles},
    create_router,
    db::CompetitionStore,
    error::{AppError, AppResult},
    models::{AppliedItem, Competition, CompetitionInput, CompetitionListItem, Competitor},
    services::AuthService,
    state::AppState,
};

pub const ADMIN_ID: i64 = 1;
pub const IVANA_ID: i64 = 2;
pub const MARKO_ID: i64 = 3;

#[derive(Default)]
struct MemoryDb {
    users: BTreeMap<i64, String>,
    competitions: BTreeMap<i64, Competition>,
    competitors: BTreeMap<i64, Competitor>,
    last_competition_id: i64,
    last_competitor_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    db: Mutex<MemoryDb>,
}

impl MemoryStore {
    /// Store with an admin and two regular users
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut db = store.lock();
            db.users.insert(ADMIN_ID, "Admin".to_string());
            db.users.insert(IVANA_ID, "Ivana".to_string());
            db.users.insert(MARKO_ID, "Marko".to_string());
        }
        store
    }

    pub fn competition_ids(&self) -> Vec<i64> {
        self.lock().competitions.keys().copied().collect()
    }

    pub fn competitors(&self) -> Vec<Competitor> {
        self.lock().competitors.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryDb> {
        self.db.lock().unwrap()
    }
}

fn fk_violation() -> AppError {
    AppError::NotFound(messages::INVALID_CALL.to_string())
}

#[async_trait]
impl CompetitionStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn list_competitions(&self) -> AppResult<Vec<CompetitionListItem>> {
        let db = self.lock();
        let mut items: Vec<_> = db
            .competitions
            .values()
            .filter_map(|c| {
                db.users.get(&c.author_id).map(|author| CompetitionListItem {
                    id: c.id,
                    name: c.name.clone(),
                    description: c.description.clone(),
                    author: author.clone(),
                    apply_till: c.apply_till,
                })
            })
            .collect();
        items.sort_by_key(|i| i.apply_till);
        Ok(items)
    }

    async fn find_competition(&self, id: i64) -> AppResult<Option<Competition>> {
        Ok(self.lock().competitions.get(&id).cloned())
    }

    async fn insert_competition(&self, input: &CompetitionInput, author_id: i64) -> AppResult<u64> {
        let mut db = self.lock();
        if !db.users.contains_key(&author_id) {
            return Err(fk_violation());
        }
        db.last_competition_id += 1;
        let id = db.last_competition_id;
        db.competitions.insert(
            id,
            Competition {
                id,
                name: input.name.clone(),
                description: input.description.clone(),
                author_id,
                apply_till: input.apply_till,
            },
        );
        Ok(1)
    }

    async fn update_competition(&self, id: i64, input: &CompetitionInput) -> AppResult<u64> {
        let mut db = self.lock();
        match db.competitions.get_mut(&id) {
            Some(c) => {
                c.name = input.name.clone();
                c.description = input.description.clone();
                c.apply_till = input.apply_till;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_competition(&self, id: i64) -> AppResult<u64> {
        let mut db = self.lock();
        if db.competitions.remove(&id).is_none() {
            return Ok(0);
        }
        db.competitors.retain(|_, a| a.id_competitions != id);
        Ok(1)
    }

    async fn has_applied(&self, user_id: i64, competition_id: i64) -> AppResult<bool> {
        Ok(self
            .lock()
            .competitors
            .values()
            .any(|a| a.id_users == user_id && a.id_competitions == competition_id))
    }

    async fn insert_competitor(&self, user_id: i64, competition_id: i64) -> AppResult<u64> {
        let mut db = self.lock();
        if !db.users.contains_key(&user_id) || !db.competitions.contains_key(&competition_id) {
            return Err(fk_violation());
        }
        let duplicate = db
            .competitors
            .values()
            .any(|a| a.id_users == user_id && a.id_competitions == competition_id);
        if duplicate {
            return Ok(0);
        }
        db.last_competitor_id += 1;
        let id = db.last_competitor_id;
        db.competitors.insert(
            id,
            Competitor {
                id,
                id_users: user_id,
                id_competitions: competition_id,
                bodovi: None,
            },
        );
        Ok(1)
    }

    async fn list_applied(&self, competition_id: i64) -> AppResult<Vec<AppliedItem>> {
        let db = self.lock();
        let Some(competition) = db.competitions.get(&competition_id) else {
            return Ok(Vec::new());
        };
        let mut items: Vec<_> = db
            .competitors
            .values()
            .filter(|a| a.id_competitions == competition_id)
            .filter_map(|a| {
                db.users.get(&a.id_users).map(|user| AppliedItem {
                    id: a.id,
                    name: competition.name.clone(),
                    korisnik: user.clone(),
                    bodovi: a.bodovi,
                })
            })
            .collect();
        items.sort_by(|a, b| {
            b.bodovi
                .is_none()
                .cmp(&a.bodovi.is_none())
                .then(a.bodovi.partial_cmp(&b.bodovi).unwrap_or(std::cmp::Ordering::Equal))
                .then(a.id.cmp(&b.id))
        });
        Ok(items)
    }

    async fn find_competitor(&self, id: i64) -> AppResult<Option<Competitor>> {
        Ok(self.lock().competitors.get(&id).cloned())
    }

    async fn set_score(&self, id: i64, bodovi: f64) -> AppResult<Option<i64>> {
        Ok(self.lock().competitors.get_mut(&id).map(|a| {
            a.bodovi = Some(bodovi);
            a.id_competitions
        }))
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            log_format: "pretty".to_string(),
            request_timeout_secs: 5,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            expiry_hours: 1,
        },
    }
}

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Router harness over an arbitrary store
pub struct TestApp {
    router: Router,
    config: Config,
}

impl TestApp {
    pub fn new(store: Arc<dyn CompetitionStore>) -> Self {
        let config = test_config();
        let router = create_router(AppState::new(store, config.clone()));
        Self { router, config }
    }

    /// Harness over a seeded in-memory store, also returning the store
    pub fn seeded() -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::seeded());
        (Self::new(store.clone()), store)
    }

    pub fn token(&self, user_id: i64, name: &str, role: &str) -> String {
        AuthService::issue_token(user_id, name, role, &self.config.jwt).unwrap()
    }

    pub fn admin_token(&self) -> String {
        self.token(ADMIN_ID, "Admin", roles::ADMIN)
    }

    pub fn user_token(&self, user_id: i64) -> String {
        self.token(user_id, "Korisnik", roles::USER)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post_form(&self, uri: &str, token: Option<&str>, body: &str) -> TestResponse {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
