use super::store;
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse, Responder};
use common::model::job_post::JobPost;
use serde_json::json;

/// Handles `GET /api/jobposts/{job_post_id}`.
pub async fn process(job_post_id: web::Path<String>) -> impl Responder {
    match get_job_post(&job_post_id) {
        Ok(post) => HttpResponse::Ok().json(json!({ "success": true, "data": post })),
        Err(e) => e.to_response(),
    }
}

fn get_job_post(job_post_id: &str) -> Result<JobPost, ApiError> {
    let conn = db::open()?;
    store::fetch_job_post(&conn, job_post_id)?.ok_or(ApiError::NotFound("Job post"))
}
