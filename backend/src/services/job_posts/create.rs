//! Handles `POST /api/jobposts/create`: multipart form with the job fields,
//! repeated `certifications` parts and best-effort `jobImages` uploads.

use super::store;
use crate::db;
use crate::error::ApiError;
use crate::services::forms::FormData;
use crate::services::uploads;
use crate::validation::job_post::{validate_job_post, JobPostDraft};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use common::model::job_post::JobPost;
use serde_json::json;

pub async fn process(payload: Multipart) -> impl Responder {
    match create_job_post(payload).await {
        Ok(post) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Job post created successfully",
            "jobPost": post,
        })),
        Err(e) => e.to_response(),
    }
}

async fn create_job_post(mut payload: Multipart) -> Result<JobPost, ApiError> {
    let form = FormData::read(&mut payload).await?;
    let job_images = uploads::store_many(&form.files_for("jobImages"), "jobs");

    let draft = JobPostDraft {
        unit_type: form.text("unitType"),
        order_quantity: form.text("orderQuantity"),
        short_description: form.text("shortDescription"),
        detailed_description: form.text("detailedDescription"),
        location: form.text("location"),
        certifications: form.texts("certifications"),
        job_images,
    };
    let doc = validate_job_post(&draft).map_err(ApiError::Validation)?;

    let conn = db::open()?;
    store::create_job_post(&conn, &doc)
}
