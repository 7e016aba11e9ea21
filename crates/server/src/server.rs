use axum::{Router, routing::get};

use std::sync::Arc;

use crate::{account, campaigns, keywords, towns};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Name of the ledger account every campaign write settles against.
    pub account_name: Arc<str>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/api/campaigns",
            get(campaigns::list).post(campaigns::create),
        )
        .route(
            "/api/campaigns/{id}",
            get(campaigns::get)
                .put(campaigns::update)
                .delete(campaigns::remove),
        )
        .route("/api/towns", get(towns::list))
        .route("/api/keywords", get(keywords::list))
        .route("/api/keywords/search", get(keywords::search))
        .route("/api/account/balance", get(account::balance))
        .with_state(state)
}

pub async fn run(engine: Engine, account_name: String) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, account_name, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    account_name: String,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        account_name: account_name.into(),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    account_name: String,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, account_name, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
