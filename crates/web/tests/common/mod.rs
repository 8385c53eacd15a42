use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use chrono::{TimeZone, Utc};
use clients::{BroadcastNotifier, ClientError, FighterDirectory};
use storage::{
    models::{Fighter, FighterKind, NewFight},
    repository::memory::InMemoryFightStore,
};
use tower::ServiceExt;
use web::{
    features::{
        fights::{FightService, FightTimeouts},
        statistics::services::{SharedWinners, spawn_collector},
    },
    state::AppState,
};

pub const NB_FIGHTS: usize = 10;

pub const DEFAULT_HERO_NAME: &str = "Super Baguette";
pub const DEFAULT_HERO_PICTURE: &str = "super_baguette.png";
pub const DEFAULT_HERO_LEVEL: i32 = 42;
pub const DEFAULT_VILLAIN_NAME: &str = "Super Chocolatine";
pub const DEFAULT_VILLAIN_PICTURE: &str = "super_chocolatine.png";
pub const DEFAULT_VILLAIN_LEVEL: i32 = 6;

/// Directory that always returns the same fighter, optionally after a delay.
pub struct StubDirectory {
    pub kind: FighterKind,
    pub fighter: Fighter,
    pub delay: Duration,
}

#[async_trait::async_trait]
impl FighterDirectory for StubDirectory {
    fn kind(&self) -> FighterKind {
        self.kind
    }

    async fn fetch_random(&self) -> clients::Result<Fighter> {
        tokio::time::sleep(self.delay).await;
        Ok(self.fighter.clone())
    }
}

/// Directory whose service cannot be reached.
pub struct UnreachableDirectory(pub FighterKind);

#[async_trait::async_trait]
impl FighterDirectory for UnreachableDirectory {
    fn kind(&self) -> FighterKind {
        self.0
    }

    async fn fetch_random(&self) -> clients::Result<Fighter> {
        Err(ClientError::StatusError {
            url: format!("http://{}.invalid/random", self.0),
            status: 503,
        })
    }
}

pub fn default_hero() -> Fighter {
    Fighter::new(DEFAULT_HERO_NAME, DEFAULT_HERO_PICTURE, DEFAULT_HERO_LEVEL)
}

pub fn default_villain() -> Fighter {
    Fighter::new(DEFAULT_VILLAIN_NAME, DEFAULT_VILLAIN_PICTURE, DEFAULT_VILLAIN_LEVEL)
}

pub fn hero_directory(delay: Duration) -> Arc<dyn FighterDirectory> {
    Arc::new(StubDirectory {
        kind: FighterKind::Hero,
        fighter: default_hero(),
        delay,
    })
}

pub fn villain_directory(delay: Duration) -> Arc<dyn FighterDirectory> {
    Arc::new(StubDirectory {
        kind: FighterKind::Villain,
        fighter: default_villain(),
        delay,
    })
}

pub fn seed_fights(count: usize) -> Vec<NewFight> {
    (0..count)
        .map(|i| NewFight {
            fight_date: Utc.with_ymd_and_hms(2024, 1, 15, 10, i as u32, 0).unwrap(),
            winner_name: format!("Winner {}", i),
            winner_picture: format!("winner_{}.png", i),
            winner_level: 10 + i as i32,
            loser_name: format!("Loser {}", i),
            loser_picture: format!("loser_{}.png", i),
            loser_level: 1 + i as i32,
        })
        .collect()
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryFightStore>,
    pub winners: SharedWinners,
}

pub fn build_app(
    store: InMemoryFightStore,
    heroes: Arc<dyn FighterDirectory>,
    villains: Arc<dyn FighterDirectory>,
) -> TestApp {
    let store = Arc::new(store);
    let winners = SharedWinners::default();
    let notifier = BroadcastNotifier::default();
    spawn_collector(notifier.subscribe(), Arc::clone(&winners));

    let service = FightService::new(
        Arc::clone(&store) as _,
        heroes,
        villains,
        Arc::new(notifier),
        FightTimeouts {
            fighters: Duration::from_millis(150),
            notify: Duration::from_millis(150),
        },
    );

    TestApp {
        router: web::fight_app(AppState::new(service, Arc::clone(&winners))),
        store,
        winners,
    }
}

/// App seeded with [`NB_FIGHTS`] fights and responsive directories.
pub fn default_app() -> TestApp {
    build_app(
        InMemoryFightStore::with_fights(seed_fights(NB_FIGHTS)),
        hero_directory(Duration::ZERO),
        villain_directory(Duration::ZERO),
    )
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("accept", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
