//! Job posting endpoints under `/api/jobposts`: create (admin), list with
//! pagination, fetch by id, delete.

mod create;
mod delete;
mod get;
mod list;
pub(crate) mod store;

use actix_web::web::{delete as http_delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/jobposts";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/create", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{job_post_id}", get().to(get::process))
        .route("/{job_post_id}", http_delete().to(delete::process))
}
