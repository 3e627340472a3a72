//! Validation for job postings. Far simpler than the company document: a
//! handful of scalar rules and the shared certification enum, no nested
//! machinery to dispatch on.

use common::model::company::Certification;
use common::model::unit_type::UnitType;
use common::model::validation::Issue;
use url::Url;

/// Raw job-post payload as read from the multipart form.
#[derive(Debug, Clone, Default)]
pub struct JobPostDraft {
    pub unit_type: Option<String>,
    pub order_quantity: Option<String>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub location: Option<String>,
    pub certifications: Vec<String>,
    pub job_images: Vec<String>,
}

/// Validated job-post document, ready for persistence.
#[derive(Debug, Clone)]
pub struct JobPostDocument {
    pub unit_type: UnitType,
    pub order_quantity: i64,
    pub short_description: String,
    pub detailed_description: Option<String>,
    pub location: String,
    pub certifications: Vec<Certification>,
    pub job_images: Vec<String>,
}

pub fn validate_job_post(draft: &JobPostDraft) -> Result<JobPostDocument, Vec<Issue>> {
    let mut issues = Vec::new();

    let unit_type = match draft.unit_type.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => match UnitType::parse(s) {
            Some(u) => Some(u),
            None => {
                issues.push(Issue::new("unitType", format!("unknown unit type: {s}")));
                None
            }
        },
        _ => {
            issues.push(Issue::new("unitType", "is required"));
            None
        }
    };

    let order_quantity = match draft.order_quantity.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => match s.parse::<i64>() {
            Ok(n) if n > 0 => Some(n),
            _ => {
                issues.push(Issue::new("orderQuantity", "must be a positive integer"));
                None
            }
        },
        _ => {
            issues.push(Issue::new("orderQuantity", "is required"));
            None
        }
    };

    let short_description = match draft.short_description.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            issues.push(Issue::new("shortDescription", "is required"));
            None
        }
    };

    let location = match draft.location.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            issues.push(Issue::new("location", "is required"));
            None
        }
    };

    let mut certifications = Vec::new();
    for (i, tag) in draft.certifications.iter().enumerate() {
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

    for (i, image) in draft.job_images.iter().enumerate() {
        if Url::parse(image).is_err() {
            issues.push(Issue::new(format!("jobImages[{i}]"), "must be a valid URL"));
        }
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(JobPostDocument {
        unit_type: unit_type.unwrap_or(UnitType::WeavingUnit),
        order_quantity: order_quantity.unwrap_or_default(),
        short_description: short_description.unwrap_or_default(),
        detailed_description: draft
            .detailed_description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        location: location.unwrap_or_default(),
        certifications,
        job_images: draft.job_images.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_passes() {
        let draft = JobPostDraft {
            unit_type: Some("STITCHING_UNIT".into()),
            order_quantity: Some("5000".into()),
            short_description: Some("T-shirt stitching, 5000 pcs".into()),
            location: Some("Tiruppur".into()),
            certifications: vec!["GOTS".into()],
            ..JobPostDraft::default()
        };
        let doc = validate_job_post(&draft).unwrap();
        assert_eq!(doc.unit_type, UnitType::StitchingUnit);
        assert_eq!(doc.order_quantity, 5000);
        assert_eq!(doc.certifications, vec![Certification::Gots]);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let issues = validate_job_post(&JobPostDraft::default()).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        for expected in ["unitType", "orderQuantity", "shortDescription", "location"] {
            assert!(paths.contains(&expected), "missing issue for {expected}");
        }
    }

    #[test]
    fn zero_order_quantity_is_rejected() {
        let draft = JobPostDraft {
            unit_type: Some("STITCHING_UNIT".into()),
            order_quantity: Some("0".into()),
            short_description: Some("x".into()),
            location: Some("Tiruppur".into()),
            ..JobPostDraft::default()
        };
        let issues = validate_job_post(&draft).unwrap_err();
        assert_eq!(issues[0].path, "orderQuantity");
    }
}
