use std::sync::Arc;

use atlas_store::MemoryStore;

use atlas_api::routes;
use atlas_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("ATLAS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let state = AppState {
        store: Arc::new(MemoryStore::new()),
    };

    let app = routes::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("failed to bind {addr}: {e}");
            std::process::exit(1);
        });

    tracing::info!("atlas-api listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
