//! # Company Document Validator
//!
//! Takes the raw field values assembled from a multipart onboarding or edit
//! request (`CompanyDraft`), validates every scalar field, then walks the
//! declared machinery list delegating each entry to the machinery validator.
//! Issues are aggregated across all fields and all machinery indices into one
//! result; a single bad machinery entry never hides the others.

use crate::validation::machinery::validate_machinery;
use common::model::company::{Certification, WorkType};
use common::model::location::Location;
use common::model::service::ServiceEntry;
use common::model::unit_type::UnitType;
use common::model::validation::Issue;
use serde_json::Value;
use url::Url;

/// Raw, pre-validation view of a company payload.
///
/// Text fields hold whatever the form carried (numbers included, still as
/// strings); `location`, `machinery` and `services` hold parsed JSON. `None`
/// means the field was absent from the request, which matters on the edit
/// path where absent fields fall back to stored values.
#[derive(Debug, Clone, Default)]
pub struct CompanyDraft {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub gst_number: Option<String>,
    pub about_company: Option<String>,
    pub work_type: Option<String>,
    pub unit_type: Option<String>,
    pub location: Option<Value>,
    pub unit_sq_feet: Option<String>,
    pub production_capacity: Option<String>,
    pub company_logo: Option<String>,
    pub unit_images: Vec<String>,
    pub certifications: Option<Vec<String>>,
    pub machinery: Option<Value>,
    pub services: Option<Value>,
}

/// Fully validated and normalized company document, ready for persistence.
///
/// `machinery`/`services` stay `Option` to preserve replace-if-provided
/// semantics on edit: `None` means the request did not touch that collection.
#[derive(Debug, Clone)]
pub struct CompanyDocument {
    pub name: String,
    pub contact_number: String,
    pub gst_number: Option<String>,
    pub about_company: Option<String>,
    pub work_type: WorkType,
    pub unit_type: UnitType,
    pub location: Location,
    pub unit_sq_feet: i64,
    pub production_capacity: Option<i64>,
    pub company_logo: Option<String>,
    pub unit_images: Vec<String>,
    pub certifications: Vec<Certification>,
    pub machinery: Option<Vec<Value>>,
    pub services: Option<Vec<ServiceEntry>>,
}

/// Validates a draft into a normalized document, or returns every issue found.
pub fn validate_company(draft: &CompanyDraft) -> Result<CompanyDocument, Vec<Issue>> {
    let mut issues = Vec::new();

    let name = required_text(&draft.name, "name", "Name is required", &mut issues);
    let contact_number = required_text(
        &draft.contact_number,
        "contactNumber",
        "Contact Number is required",
        &mut issues,
    );

    let work_type = match draft.work_type.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => match WorkType::parse(s) {
            Some(w) => Some(w),
            None => {
                issues.push(Issue::new(
                    "workType",
                    "must be one of: DOMESTIC_WORK, EXPORT_WORK",
                ));
                None
            }
        },
        _ => {
            issues.push(Issue::new("workType", "is required"));
            None
        }
    };

    let unit_type = match draft.unit_type.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => match UnitType::parse(s) {
            Some(u) => Some(u),
            None => {
                issues.push(Issue::new(
                    "unitType",
                    format!("unknown unit type: {s}"),
                ));
                None
            }
        },
        _ => {
            issues.push(Issue::new("unitType", "is required"));
            None
        }
    };

    let location = check_location(draft.location.as_ref(), &mut issues);
    let unit_sq_feet = check_positive_int(&draft.unit_sq_feet, "unitSqFeet", true, &mut issues);
    let production_capacity =
        check_positive_int(&draft.production_capacity, "productionCapacity", false, &mut issues);

    let company_logo = match draft.company_logo.as_deref() {
        Some(s) if !s.trim().is_empty() => {
            if Url::parse(s.trim()).is_err() {
                issues.push(Issue::new("companyLogo", "must be a valid URL"));
                None
            } else {
                Some(s.trim().to_string())
            }
        }
        _ => None,
    };

    for (i, image) in draft.unit_images.iter().enumerate() {
        if Url::parse(image).is_err() {
            issues.push(Issue::new(format!("unitImages[{i}]"), "must be a valid URL"));
        }
    }

    let mut certifications = Vec::new();
    if let Some(tags) = &draft.certifications {
        for (i, tag) in tags.iter().enumerate() {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            match Certification::parse(tag) {
                Some(c) => certifications.push(c),
                None => issues.push(Issue::new(
                    format!("certifications[{i}]"),
                    format!("unknown certification: {tag}"),
                )),
            }
        }
    }

    let services = check_services(draft.services.as_ref(), &mut issues);
    let machinery = check_machinery(draft.machinery.as_ref(), unit_type, &mut issues);

    if !issues.is_empty() {
        return Err(issues);
    }

    // Every None above recorded an issue, so all values are present here.
    Ok(CompanyDocument {
        name: name.unwrap_or_default(),
        contact_number: contact_number.unwrap_or_default(),
        gst_number: optional_text(&draft.gst_number),
        about_company: optional_text(&draft.about_company),
        work_type: work_type.unwrap_or(WorkType::DomesticWork),
        unit_type: unit_type.unwrap_or(UnitType::WeavingUnit),
        location: location.unwrap_or(Location {
            latitude: 0.0,
            longitude: 0.0,
            city: None,
            state: None,
            pincode: None,
            address: None,
        }),
        unit_sq_feet: unit_sq_feet.unwrap_or_default(),
        production_capacity,
        company_logo,
        unit_images: draft.unit_images.clone(),
        certifications,
        machinery,
        services,
    })
}

fn required_text(
    value: &Option<String>,
    path: &str,
    message: &str,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            issues.push(Issue::new(path, message));
            None
        }
    }
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn check_positive_int(
    value: &Option<String>,
    path: &str,
    required: bool,
    issues: &mut Vec<Issue>,
) -> Option<i64> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => match s.parse::<i64>() {
            Ok(n) if n > 0 => Some(n),
            _ => {
                issues.push(Issue::new(path, "must be a positive integer"));
                None
            }
        },
        _ => {
            if required {
                issues.push(Issue::new(path, "is required"));
            }
            None
        }
    }
}

fn check_location(value: Option<&Value>, issues: &mut Vec<Issue>) -> Option<Location> {
    let Some(value) = value else {
        issues.push(Issue::new("location", "is required"));
        return None;
    };
    let Some(object) = value.as_object() else {
        issues.push(Issue::new("location", "must be a JSON object"));
        return None;
    };

    let latitude = object.get("latitude").and_then(Value::as_f64);
    let longitude = object.get("longitude").and_then(Value::as_f64);
    if latitude.is_none() {
        issues.push(Issue::new("location.latitude", "must be a number"));
    }
    if longitude.is_none() {
        issues.push(Issue::new("location.longitude", "must be a number"));
    }

    let text = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Some(Location {
        latitude: latitude?,
        longitude: longitude?,
        city: text("city"),
        state: text("state"),
        pincode: text("pincode"),
        address: text("address"),
    })
}

fn check_services(value: Option<&Value>, issues: &mut Vec<Issue>) -> Option<Vec<ServiceEntry>> {
    let value = value?;
    let Some(items) = value.as_array() else {
        issues.push(Issue::new("services", "must be a JSON array"));
        return None;
    };
    let mut entries = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<ServiceEntry>(item.clone()) {
            Ok(entry) => entries.push(entry),
            Err(_) => issues.push(Issue::new(
                format!("services[{i}]"),
                "must be an object with optional title and description",
            )),
        }
    }
    Some(entries)
}

fn check_machinery(
    value: Option<&Value>,
    unit_type: Option<UnitType>,
    issues: &mut Vec<Issue>,
) -> Option<Vec<Value>> {
    let value = value?;
    let Some(items) = value.as_array() else {
        issues.push(Issue::new("machinery", "must be a JSON array"));
        return None;
    };
    // Without a valid unit type there is no schema to check against; the
    // unitType issue already recorded fails the document as a whole.
    let unit_type = unit_type?;

    let mut normalized = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match validate_machinery(unit_type, item) {
            Ok(record) => normalized.push(record),
            Err(sub_issues) => {
                for sub in sub_issues {
                    let path = if sub.path.is_empty() {
                        format!("machinery[{i}]")
                    } else {
                        format!("machinery[{i}].{}", sub.path)
                    };
                    issues.push(Issue::new(path, sub.message));
                }
            }
        }
    }
    Some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weaving_draft() -> CompanyDraft {
        CompanyDraft {
            name: Some("Sri Lakshmi Textiles".into()),
            contact_number: Some("+91 9876543210".into()),
            work_type: Some("EXPORT_WORK".into()),
            unit_type: Some("WEAVING_UNIT".into()),
            location: Some(json!({ "latitude": 11.1085, "longitude": 77.3411, "city": "Tiruppur" })),
            unit_sq_feet: Some("12000".into()),
            machinery: Some(json!([
                { "machineType": "Rapier Loom", "typeOfYarn": "Cotton", "noOfMachines": 3 }
            ])),
            ..CompanyDraft::default()
        }
    }

    #[test]
    fn valid_draft_produces_normalized_document() {
        let doc = validate_company(&weaving_draft()).unwrap();
        assert_eq!(doc.unit_type, UnitType::WeavingUnit);
        assert_eq!(doc.work_type, WorkType::ExportWork);
        assert_eq!(doc.location.city.as_deref(), Some("Tiruppur"));
        let machinery = doc.machinery.unwrap();
        assert_eq!(machinery.len(), 1);
        assert_eq!(machinery[0]["noOfMachines"], 3);
    }

    #[test]
    fn missing_required_scalars_are_all_reported() {
        let draft = CompanyDraft::default();
        let issues = validate_company(&draft).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        for expected in ["name", "contactNumber", "workType", "unitType", "location", "unitSqFeet"]
        {
            assert!(paths.contains(&expected), "missing issue for {expected}");
        }
    }

    #[test]
    fn machinery_validation_does_not_short_circuit() {
        let mut draft = weaving_draft();
        draft.machinery = Some(json!([
            { "machineType": "Rapier Loom", "typeOfYarn": "Wool", "noOfMachines": 3 },
            { "machineType": "Rapier Loom", "typeOfYarn": "Cotton", "noOfMachines": 3 },
            { "machineType": "Rapier Loom", "typeOfYarn": "Cotton", "noOfMachines": -2 }
        ]));
        let issues = validate_company(&draft).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert!(paths.contains(&"machinery[0].typeOfYarn"));
        assert!(paths.contains(&"machinery[2].noOfMachines"));
        assert!(!paths.iter().any(|p| p.starts_with("machinery[1]")));
    }

    #[test]
    fn machinery_is_checked_against_the_drafts_own_unit_type() {
        let mut draft = weaving_draft();
        draft.unit_type = Some("KNITTING_UNIT".into());
        // A perfectly good weaving record is not a knitting record.
        let issues = validate_company(&draft).unwrap_err();
        assert!(issues.iter().any(|i| i.path.starts_with("machinery[0]")));
    }

    #[test]
    fn bad_urls_and_certifications_are_flagged() {
        let mut draft = weaving_draft();
        draft.company_logo = Some("not a url".into());
        draft.unit_images = vec!["https://cdn.example.com/a.jpg".into(), "nope".into()];
        draft.certifications = Some(vec!["GOTS".into(), "ISO 14001".into()]);
        let issues = validate_company(&draft).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert!(paths.contains(&"companyLogo"));
        assert!(paths.contains(&"unitImages[1]"));
        assert!(paths.contains(&"certifications[1]"));
    }

    #[test]
    fn absent_machinery_and_services_stay_absent() {
        let mut draft = weaving_draft();
        draft.machinery = None;
        let doc = validate_company(&draft).unwrap();
        assert!(doc.machinery.is_none());
        assert!(doc.services.is_none());
    }
}
