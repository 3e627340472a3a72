//! # Company Onboarding Service
//!
//! Handles `POST /api/companies/onboard`. The request is a multipart form:
//! scalar company fields as text parts, `location`/`machinery`/`services` as
//! JSON text parts, repeated `certifications` parts, a single `companyLogo`
//! file and any number of `unitImages` files.
//!
//! Files are uploaded first: a failing logo upload aborts the request, while
//! unit images are best-effort. Validation runs after the uploads, and only
//! a fully valid document reaches the store, so a rejected request writes no
//! rows (uploaded objects are not rolled back).

use super::store;
use crate::db;
use crate::error::ApiError;
use crate::services::forms::FormData;
use crate::services::uploads;
use crate::validation::company::{validate_company, CompanyDraft};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use common::model::company::Company;
use serde_json::json;

pub async fn process(payload: Multipart) -> impl Responder {
    match onboard_company(payload).await {
        Ok(company) => HttpResponse::Ok().json(json!({ "success": true, "company": company })),
        Err(e) => e.to_response(),
    }
}

async fn onboard_company(mut payload: Multipart) -> Result<Company, ApiError> {
    let form = FormData::read(&mut payload).await?;

    let company_logo = match form.files_for("companyLogo").first() {
        Some(logo) => Some(uploads::store_file(logo, "logos")?),
        None => None,
    };
    let unit_images = uploads::store_many(&form.files_for("unitImages"), "units");

    let mut draft = draft_from_form(&form)?;
    draft.company_logo = company_logo;
    draft.unit_images = unit_images;

    let doc = validate_company(&draft).map_err(ApiError::Validation)?;

    let mut conn = db::open()?;
    store::create_company(&mut conn, &doc)
}

/// Builds the raw draft from the form's text parts. Shared with the edit
/// handler, which merges the result over the stored company.
pub(super) fn draft_from_form(form: &FormData) -> Result<CompanyDraft, ApiError> {
    let certifications = form.texts("certifications");
    Ok(CompanyDraft {
        name: form.text("name"),
        contact_number: form.text("contactNumber"),
        gst_number: form.text("gstNumber"),
        about_company: form.text("aboutCompany"),
        work_type: form.text("workType"),
        unit_type: form.text("unitType"),
        location: form.json("location")?,
        unit_sq_feet: form.text("unitSqFeet"),
        production_capacity: form.text("productionCapacity"),
        company_logo: None,
        unit_images: Vec::new(),
        certifications: if certifications.is_empty() {
            None
        } else {
            Some(certifications)
        },
        machinery: form.json("machinery")?,
        services: form.json("services")?,
    })
}
