use super::store;
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse, Responder};
use common::model::company::Company;
use serde_json::json;

/// Handles `GET /api/companies/{company_id}`.
pub async fn process(company_id: web::Path<String>) -> impl Responder {
    match get_company(&company_id) {
        Ok(company) => HttpResponse::Ok().json(json!({ "success": true, "data": company })),
        Err(e) => e.to_response(),
    }
}

fn get_company(company_id: &str) -> Result<Company, ApiError> {
    let conn = db::open()?;
    store::fetch_company(&conn, company_id)?.ok_or(ApiError::NotFound("Company"))
}
