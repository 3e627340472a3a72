//! # Company Edit Service
//!
//! Handles `PUT /api/companies/{company_id}`. The payload is a partial
//! version of the onboarding form: absent fields fall back to the stored
//! values, newly uploaded images append to the stored list, and a supplied
//! machinery or services list (even an empty one) replaces the stored set.
//!
//! The merged document is re-validated in full before anything is written.
//! In particular, when the edit changes the company's unit type, every
//! resubmitted machinery entry must satisfy the NEW unit type's schema and
//! any machinery that was not resubmitted is discarded.

use super::onboard::draft_from_form;
use super::store;
use crate::db;
use crate::error::ApiError;
use crate::services::forms::FormData;
use crate::services::uploads;
use crate::validation::company::validate_company;
use crate::validation::merge::merge_into_draft;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::company::Company;
use log::warn;
use serde_json::json;

pub async fn process(company_id: web::Path<String>, payload: Multipart) -> impl Responder {
    match edit_company(&company_id, payload).await {
        Ok(company) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Company updated successfully.",
            "company": company,
        })),
        Err(e) => e.to_response(),
    }
}

async fn edit_company(company_id: &str, mut payload: Multipart) -> Result<Company, ApiError> {
    let mut conn = db::open()?;
    let existing =
        store::fetch_company(&conn, company_id)?.ok_or(ApiError::NotFound("Company"))?;

    let form = FormData::read(&mut payload).await?;

    let company_logo = match form.files_for("companyLogo").first() {
        Some(logo) => Some(uploads::store_file(logo, "logos")?),
        None => None,
    };
    let unit_images = uploads::store_many(&form.files_for("unitImages"), "units");

    let mut draft = draft_from_form(&form)?;
    draft.company_logo = company_logo;
    draft.unit_images = unit_images;

    let effective = merge_into_draft(&existing, draft);
    if effective.unit_type.as_deref() != Some(existing.unit_type.as_str())
        && !existing.machinery.is_empty()
    {
        warn!(
            "Unit type of company {} changed from {}, stored machinery will be replaced",
            company_id,
            existing.unit_type.as_str()
        );
    }

    let doc = validate_company(&effective).map_err(ApiError::Validation)?;

    store::replace_company(&mut conn, company_id, &doc)?.ok_or(ApiError::NotFound("Company"))
}
