mod config;
mod db;
mod error;
mod schemas;
mod services;
mod validation;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Create the tables up front so the first request doesn't pay for it.
    db::open().map_err(|e| std::io::Error::other(format!("failed to open database: {e}")))?;
    std::fs::create_dir_all(config::uploads_dir())?;

    let host = config::host();
    let port = config::port();
    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .service(services::companies::configure_routes())
            .service(services::job_posts::configure_routes())
            .service(Files::new("/uploads", config::uploads_dir()))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
