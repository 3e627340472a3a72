use super::store;
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse, Responder};
use common::model::company::DeletionSummary;
use serde_json::json;

/// Handles `DELETE /api/companies/{company_id}`.
pub async fn process(company_id: web::Path<String>) -> impl Responder {
    match delete_company(&company_id) {
        Ok(summary) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": format!("Company \"{}\" deleted successfully", summary.name),
            "deletedCompany": summary,
        })),
        Err(e) => e.to_response(),
    }
}

fn delete_company(company_id: &str) -> Result<DeletionSummary, ApiError> {
    let mut conn = db::open()?;
    store::delete_company(&mut conn, company_id)?.ok_or(ApiError::NotFound("Company"))
}
