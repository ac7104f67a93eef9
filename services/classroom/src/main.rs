use sea_orm::Database;
use tracing::info;

use campus_classroom::config::ClassroomConfig;
use campus_classroom::router::build_router;
use campus_classroom::state::AppState;

#[tokio::main]
async fn main() {
    campus_core::tracing::init_tracing();

    let config = ClassroomConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.classroom_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("classroom service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
