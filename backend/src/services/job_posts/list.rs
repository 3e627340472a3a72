use super::store::{self, JobPostFilters};
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse, Responder};
use common::model::job_post::JobPost;
use common::model::pagination::Pagination;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    unit_type: Option<String>,
    location: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

pub async fn process(query: web::Query<ListQuery>) -> impl Responder {
    match list_job_posts(&query) {
        Ok((posts, pagination)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": posts,
            "pagination": pagination,
        })),
        Err(e) => e.to_response(),
    }
}

fn list_job_posts(query: &ListQuery) -> Result<(Vec<JobPost>, Pagination), ApiError> {
    let conn = db::open()?;
    let filters = JobPostFilters {
        unit_type: query.unit_type.clone(),
        location: query.location.clone(),
    };
    store::list_job_posts(&conn, &filters, query.page, query.limit.clamp(1, 100))
}
