/// Classroom service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ClassroomConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3310). Env var: `CLASSROOM_PORT`.
    pub classroom_port: u16,
}

impl ClassroomConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            classroom_port: std::env::var("CLASSROOM_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3310),
        }
    }
}
