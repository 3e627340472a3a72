use crate::model::location::Location;
use crate::model::machinery::Machinery;
use crate::model::service::ServiceRecord;
use crate::model::unit_type::UnitType;
use serde::{Deserialize, Serialize};

/// Whether a company takes domestic or export orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkType {
    DomesticWork,
    ExportWork,
}

impl WorkType {
    pub const ALL: [WorkType; 2] = [WorkType::DomesticWork, WorkType::ExportWork];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::DomesticWork => "DOMESTIC_WORK",
            WorkType::ExportWork => "EXPORT_WORK",
        }
    }

    pub fn parse(s: &str) -> Option<WorkType> {
        WorkType::ALL.iter().copied().find(|w| w.as_str() == s)
    }
}

/// Industry certifications a company can declare. The wire names are the
/// human-readable labels used by the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Certification {
    #[serde(rename = "Import Export Certificate")]
    ImportExportCertificate,
    #[serde(rename = "ISO 9001")]
    Iso9001,
    #[serde(rename = "GOTS")]
    Gots,
    #[serde(rename = "Fair Trade")]
    FairTrade,
    #[serde(rename = "OEKO-TEX")]
    OekoTex,
    #[serde(rename = "SA8000")]
    Sa8000,
    #[serde(rename = "RCS")]
    Rcs,
    #[serde(rename = "BCI Cotton")]
    BciCotton,
    #[serde(rename = "Sedex")]
    Sedex,
    #[serde(rename = "OCS")]
    Ocs,
    #[serde(rename = "GRS")]
    Grs,
}

impl Certification {
    pub const ALL: [Certification; 11] = [
        Certification::ImportExportCertificate,
        Certification::Iso9001,
        Certification::Gots,
        Certification::FairTrade,
        Certification::OekoTex,
        Certification::Sa8000,
        Certification::Rcs,
        Certification::BciCotton,
        Certification::Sedex,
        Certification::Ocs,
        Certification::Grs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Certification::ImportExportCertificate => "Import Export Certificate",
            Certification::Iso9001 => "ISO 9001",
            Certification::Gots => "GOTS",
            Certification::FairTrade => "Fair Trade",
            Certification::OekoTex => "OEKO-TEX",
            Certification::Sa8000 => "SA8000",
            Certification::Rcs => "RCS",
            Certification::BciCotton => "BCI Cotton",
            Certification::Sedex => "Sedex",
            Certification::Ocs => "OCS",
            Certification::Grs => "GRS",
        }
    }

    pub fn parse(s: &str) -> Option<Certification> {
        Certification::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// A persisted company aggregate: the row itself plus its machinery and
/// service children, as returned by create/edit/fetch endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_company: Option<String>,
    pub work_type: WorkType,
    pub unit_type: UnitType,
    pub location: Location,
    pub unit_sq_feet: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    pub unit_images: Vec<String>,
    pub certifications: Vec<Certification>,
    pub machinery: Vec<Machinery>,
    pub services: Vec<ServiceRecord>,
    pub created_at: String,
    pub updated_at: String,
}

/// Slim row for the paginated directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    pub unit_type: UnitType,
    pub work_type: WorkType,
    pub location: Location,
    pub updated_at: String,
}

/// What a successful delete reports back: which company went away and how
/// many children were removed with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionSummary {
    pub id: String,
    pub name: String,
    pub deleted_machinery: u64,
    pub deleted_services: u64,
}
