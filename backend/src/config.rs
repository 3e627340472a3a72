//! Process configuration, read from the environment with local-dev defaults.

use std::env;

pub fn host() -> String {
    env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
}

pub fn port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

pub fn database_path() -> String {
    env::var("DATABASE_PATH").unwrap_or_else(|_| "loomdir.sqlite".to_string())
}

pub fn uploads_dir() -> String {
    env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string())
}

/// Base URL under which uploaded objects are publicly reachable.
pub fn public_base_url() -> String {
    env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", host(), port()))
}
