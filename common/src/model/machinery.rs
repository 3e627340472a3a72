use crate::model::unit_type::UnitType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One category-specific equipment record owned by a company.
///
/// `machine_data` is the schema-validated payload exactly as normalized by the
/// machinery validator; its shape depends on the owning company's unit type,
/// which is denormalized here at write time. `quantity` mirrors the payload's
/// `noOfMachines` attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machinery {
    pub id: String,
    pub company_id: String,
    pub unit_type: UnitType,
    pub machine_data: Value,
    pub quantity: i64,
}
