//! # Merge Policy
//!
//! Computes the effective document for an edit: for each field, a supplied
//! value wins over the stored one, with three special cases.
//!
//! - Location merges field by field: latitude/longitude come from the new
//!   payload whenever one is supplied, the optional address sub-fields are
//!   overwritten only when present and retained otherwise.
//! - Image collections append: newly uploaded images are concatenated onto
//!   the stored list, never replacing it.
//! - Machinery and services replace-if-provided: a supplied list (even an
//!   empty one) replaces the stored set, an absent field leaves it alone.
//!
//! Changing the unit type invalidates the stored machinery set: records that
//! are not resubmitted are discarded, and anything resubmitted is validated
//! against the new unit type's schema downstream.

use crate::validation::company::CompanyDraft;
use common::model::company::Company;
use serde_json::{json, Value};

/// Merges a stored company into an incoming partial draft, producing the
/// effective draft that full validation then runs on.
pub fn merge_into_draft(existing: &Company, incoming: CompanyDraft) -> CompanyDraft {
    let unit_type = pick(incoming.unit_type, existing.unit_type.as_str());
    let unit_type_changed = unit_type.as_deref() != Some(existing.unit_type.as_str());

    let mut machinery = incoming.machinery;
    if unit_type_changed && machinery.is_none() {
        // The old machinery no longer matches the company's schema; absent
        // resubmission means the stored set is dropped, not carried over.
        machinery = Some(Value::Array(Vec::new()));
    }

    let mut unit_images = existing.unit_images.clone();
    unit_images.extend(incoming.unit_images);

    CompanyDraft {
        name: pick(incoming.name, &existing.name),
        contact_number: pick(incoming.contact_number, &existing.contact_number),
        gst_number: incoming
            .gst_number
            .or_else(|| existing.gst_number.clone()),
        about_company: incoming
            .about_company
            .or_else(|| existing.about_company.clone()),
        work_type: pick(incoming.work_type, existing.work_type.as_str()),
        unit_type,
        location: Some(merge_location(existing, incoming.location)),
        unit_sq_feet: pick(incoming.unit_sq_feet, &existing.unit_sq_feet.to_string()),
        production_capacity: incoming.production_capacity.or_else(|| {
            existing.production_capacity.map(|c| c.to_string())
        }),
        company_logo: incoming
            .company_logo
            .or_else(|| existing.company_logo.clone()),
        unit_images,
        certifications: match incoming.certifications {
            Some(tags) if !tags.is_empty() => Some(tags),
            _ => Some(
                existing
                    .certifications
                    .iter()
                    .map(|c| c.as_str().to_string())
                    .collect(),
            ),
        },
        machinery,
        services: incoming.services,
    }
}

/// Incoming value wins when present and non-empty after trimming.
fn pick(incoming: Option<String>, stored: &str) -> Option<String> {
    match incoming.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => Some(stored.to_string()),
    }
}

fn merge_location(existing: &Company, incoming: Option<Value>) -> Value {
    let stored = &existing.location;
    let Some(payload) = incoming else {
        return json!(stored);
    };

    let sub = |key: &str, stored_value: &Option<String>| -> Value {
        payload
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Value::String(s.to_string()))
            .or_else(|| stored_value.clone().map(Value::String))
            .unwrap_or(Value::Null)
    };

    json!({
        "latitude": payload.get("latitude").cloned().unwrap_or(Value::Null),
        "longitude": payload.get("longitude").cloned().unwrap_or(Value::Null),
        "city": sub("city", &stored.city),
        "state": sub("state", &stored.state),
        "pincode": sub("pincode", &stored.pincode),
        "address": sub("address", &stored.address),
    })
}
