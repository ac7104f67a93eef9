//! Liveness and readiness endpoints mounted by every service router.

use axum::http::StatusCode;

/// `GET /healthz` — the process is up.
pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// `GET /readyz` — the process accepts traffic. Services with external
/// dependencies to probe can mount their own handler instead.
pub async fn readyz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
