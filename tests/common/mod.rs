#![allow(dead_code)]

use sqlx::PgPool;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::mpsc;

use axum::extract::ConnectInfo;
use shorty::application::services::{AccessService, ShortenerService};
use shorty::domain::hit_event::HitEvent;
use shorty::infrastructure::persistence::PgShortLinkRepository;
use shorty::state::AppState;
use shorty::utils::alphabet::{Alphabet, DEFAULT_CHARS};
use shorty::utils::codec::ShortCodec;

pub const HOSTNAME: &str = "https://s.test";

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<HitEvent>) {
    build_state(pool, "", 0, Vec::new(), None)
}

pub fn create_salted_state(pool: PgPool) -> (AppState, mpsc::Receiver<HitEvent>) {
    build_state(pool, "secret", 3, Vec::new(), None)
}

pub fn create_guarded_state(
    pool: PgPool,
    whitelist: Vec<IpAddr>,
    password: Option<String>,
) -> (AppState, mpsc::Receiver<HitEvent>) {
    build_state(pool, "", 0, whitelist, password)
}

pub fn build_state(
    pool: PgPool,
    salt: &str,
    padding: u32,
    whitelist: Vec<IpAddr>,
    password: Option<String>,
) -> (AppState, mpsc::Receiver<HitEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let repository = Arc::new(PgShortLinkRepository::new(pool.clone()));
    let codec = ShortCodec::new(Alphabet::new(DEFAULT_CHARS).unwrap(), salt, padding);
    let shortener_service = Arc::new(ShortenerService::new(repository, codec, HOSTNAME));
    let access_service = Arc::new(AccessService::new(whitelist, password, false));

    let state = AppState {
        shortener_service,
        access_service,
        hit_sender: tx,
        track_hits: true,
        db: pool,
    };

    (state, rx)
}

pub fn plain_codec() -> ShortCodec {
    ShortCodec::new(Alphabet::new(DEFAULT_CHARS).unwrap(), "", 0)
}

pub async fn insert_url(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (url, created) VALUES ($1, NOW()) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE url = $1")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_hits(pool: &PgPool, id: i64) -> i64 {
    sqlx::query_scalar("SELECT hits FROM urls WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Injects a fixed peer address, standing in for a real TCP connection
/// so extractors relying on `ConnectInfo` work under `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer {
    addr: SocketAddr,
}

impl MockConnectInfoLayer {
    pub fn new(addr: &str) -> Self {
        Self {
            addr: addr.parse().unwrap(),
        }
    }
}

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.addr,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}
