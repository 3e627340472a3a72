//! # Company Service Module
//!
//! API endpoints for onboarding and managing textile companies under
//! `/api/companies`. The handlers here are thin: multipart intake and file
//! uploads, then delegation to the validators and the store.
//!
//! ## Registered Routes:
//!
//! *   **`POST /onboard`**: validates the submitted company (including every
//!     machinery entry against the schema for its unit type) and persists the
//!     aggregate in one transaction.
//! *   **`GET /`**: paginated directory listing with optional `name`,
//!     `unitType`, `workType` and `location` (city) filters.
//! *   **`GET /{company_id}`**: full aggregate with machinery and services.
//! *   **`PUT /{company_id}`**: edit. Merges the partial payload over the
//!     stored company, re-validates the effective document, and replaces the
//!     child collections that the request supplied.
//! *   **`DELETE /{company_id}`**: removes the company and its children,
//!     reporting how many of each were deleted.
//!
//! Callers are assumed to have passed the admin gate upstream; these handlers
//! do not authenticate.

mod delete;
mod edit;
mod get;
mod list;
mod onboard;
pub(crate) mod store;

use actix_web::web::{delete as http_delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/companies";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/onboard", post().to(onboard::process))
        .route("", get().to(list::process))
        .route("/{company_id}", get().to(get::process))
        .route("/{company_id}", put().to(edit::process))
        .route("/{company_id}", http_delete().to(delete::process))
}
