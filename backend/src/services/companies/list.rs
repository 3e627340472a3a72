use super::store::{self, CompanyFilters};
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse, Responder};
use common::model::company::CompanySummary;
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
    name: Option<String>,
    unit_type: Option<String>,
    work_type: Option<String>,
    location: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Handles `GET /api/companies`, the paginated directory listing.
pub async fn process(query: web::Query<ListQuery>) -> impl Responder {
    match list_companies(&query) {
        Ok((companies, pagination)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": companies,
            "pagination": pagination,
        })),
        Err(e) => e.to_response(),
    }
}

fn list_companies(query: &ListQuery) -> Result<(Vec<CompanySummary>, Pagination), ApiError> {
    let conn = db::open()?;
    let filters = CompanyFilters {
        name: query.name.clone(),
        unit_type: query.unit_type.clone(),
        work_type: query.work_type.clone(),
        location: query.location.clone(),
    };
    store::list_companies(&conn, &filters, query.page, query.limit.clamp(1, 100))
}
