use crate::model::company::Certification;
use crate::model::unit_type::UnitType;
use serde::{Deserialize, Serialize};

/// A job posting looking for manufacturing capacity of a given unit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    pub id: String,
    pub unit_type: UnitType,
    pub order_quantity: i64,
    pub short_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    pub certifications: Vec<Certification>,
    pub job_images: Vec<String>,
    pub location: String,
    pub created_at: String,
}
