//! # Company Persistence
//!
//! Create, replace, fetch, list and delete for the company aggregate. Every
//! mutating operation is one SQLite transaction: a company row and its
//! machinery/service children commit together or not at all, and an edit
//! that supplies a child list deletes the old rows before inserting the new
//! ones inside the same transaction, so readers never see a mixed set.

use crate::error::ApiError;
use crate::validation::company::CompanyDocument;
use common::model::company::{
    Certification, Company, CompanySummary, DeletionSummary, WorkType,
};
use common::model::location::Location;
use common::model::machinery::Machinery;
use common::model::pagination::Pagination;
use common::model::service::ServiceRecord;
use common::model::unit_type::UnitType;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use serde_json::Value;
use uuid::Uuid;

/// Optional filters for the directory listing.
#[derive(Debug, Default, Clone)]
pub struct CompanyFilters {
    pub name: Option<String>,
    pub unit_type: Option<String>,
    pub work_type: Option<String>,
    pub location: Option<String>,
}

/// Inserts the company and all of its children in one transaction and
/// returns the persisted aggregate.
pub fn create_company(conn: &mut Connection, doc: &CompanyDocument) -> Result<Company, ApiError> {
    let id = Uuid::new_v4().to_string();

    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO companies (id, name, contact_number, gst_number, about_company,
            work_type, unit_type, location, unit_sq_feet, production_capacity,
            company_logo, unit_images, certifications)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            id,
            doc.name,
            doc.contact_number,
            doc.gst_number,
            doc.about_company,
            doc.work_type.as_str(),
            doc.unit_type.as_str(),
            serde_json::to_string(&doc.location)?,
            doc.unit_sq_feet,
            doc.production_capacity,
            doc.company_logo,
            serde_json::to_string(&doc.unit_images)?,
            serde_json::to_string(&doc.certifications)?,
        ],
    )?;
    insert_children(&tx, &id, doc)?;
    tx.commit()?;

    load_company(conn, &id)
}

/// Replaces a company's scalars and, independently for machinery and
/// services, its child sets when the document carries them. Returns `None`
/// without side effects when the id is unknown.
pub fn replace_company(
    conn: &mut Connection,
    id: &str,
    doc: &CompanyDocument,
) -> Result<Option<Company>, ApiError> {
    let tx = conn.transaction()?;

    let exists: Option<String> = tx
        .query_row("SELECT id FROM companies WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .optional()?;
    if exists.is_none() {
        return Ok(None);
    }

    if doc.machinery.is_some() {
        tx.execute("DELETE FROM machinery WHERE company_id = ?1", [id])?;
    }
    if doc.services.is_some() {
        tx.execute("DELETE FROM services WHERE company_id = ?1", [id])?;
    }
    insert_children(&tx, id, doc)?;

    tx.execute(
        "UPDATE companies SET name = ?2, contact_number = ?3, gst_number = ?4,
            about_company = ?5, work_type = ?6, unit_type = ?7, location = ?8,
            unit_sq_feet = ?9, production_capacity = ?10, company_logo = ?11,
            unit_images = ?12, certifications = ?13, updated_at = datetime('now')
         WHERE id = ?1",
        params![
            id,
            doc.name,
            doc.contact_number,
            doc.gst_number,
            doc.about_company,
            doc.work_type.as_str(),
            doc.unit_type.as_str(),
            serde_json::to_string(&doc.location)?,
            doc.unit_sq_feet,
            doc.production_capacity,
            doc.company_logo,
            serde_json::to_string(&doc.unit_images)?,
            serde_json::to_string(&doc.certifications)?,
        ],
    )?;
    tx.commit()?;

    load_company(conn, id).map(Some)
}

/// Deletes a company, cascading to its children, and reports what went away.
pub fn delete_company(
    conn: &mut Connection,
    id: &str,
) -> Result<Option<DeletionSummary>, ApiError> {
    let tx = conn.transaction()?;

    let found: Option<(String, String)> = tx
        .query_row(
            "SELECT id, name FROM companies WHERE id = ?1",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;
    let Some((company_id, name)) = found else {
        return Ok(None);
    };

    let machinery_count: u64 = tx.query_row(
        "SELECT COUNT(*) FROM machinery WHERE company_id = ?1",
        [id],
        |row| row.get(0),
    )?;
    let service_count: u64 = tx.query_row(
        "SELECT COUNT(*) FROM services WHERE company_id = ?1",
        [id],
        |row| row.get(0),
    )?;

    tx.execute("DELETE FROM companies WHERE id = ?1", [id])?;
    tx.commit()?;

    Ok(Some(DeletionSummary {
        id: company_id,
        name,
        deleted_machinery: machinery_count,
        deleted_services: service_count,
    }))
}

/// Fetches the full aggregate, or `None` for an unknown id.
pub fn fetch_company(conn: &Connection, id: &str) -> Result<Option<Company>, ApiError> {
    let exists: Option<String> = conn
        .query_row("SELECT id FROM companies WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .optional()?;
    match exists {
        Some(_) => load_company(conn, id).map(Some),
        None => Ok(None),
    }
}

/// Paginated directory listing, newest edits first.
pub fn list_companies(
    conn: &Connection,
    filters: &CompanyFilters,
    page: u64,
    limit: u64,
) -> Result<(Vec<CompanySummary>, Pagination), ApiError> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(name) = filters.name.as_deref().filter(|s| !s.is_empty()) {
        // SQLite LIKE is case-insensitive for ASCII only.
        clauses.push("name LIKE ?");
        values.push(format!("%{name}%"));
    }
    if let Some(unit) = filters.unit_type.as_deref().filter(|s| !s.is_empty()) {
        clauses.push("unit_type = ?");
        values.push(unit.to_string());
    }
    if let Some(work) = filters.work_type.as_deref().filter(|s| !s.is_empty()) {
        clauses.push("work_type = ?");
        values.push(work.to_string());
    }
    if let Some(city) = filters.location.as_deref().filter(|s| !s.is_empty()) {
        clauses.push("json_extract(location, '$.city') LIKE ?");
        values.push(format!("%{city}%"));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let total: u64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM companies{where_sql}"),
        rusqlite::params_from_iter(values.iter()),
        |row| row.get(0),
    )?;

    let page = page.max(1);
    let offset = (page - 1) * limit;
    let mut stmt = conn.prepare(&format!(
        "SELECT id, name, company_logo, unit_type, work_type, location, updated_at
         FROM companies{where_sql}
         ORDER BY updated_at DESC
         LIMIT {limit} OFFSET {offset}"
    ))?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values.iter()), |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
        ))
    })?;

    let mut companies = Vec::new();
    for row in rows {
        let (id, name, company_logo, unit_type, work_type, location, updated_at) = row?;
        companies.push(CompanySummary {
            id,
            name,
            company_logo,
            unit_type: parse_unit_type(&unit_type)?,
            work_type: parse_work_type(&work_type)?,
            location: serde_json::from_str(&location)?,
            updated_at,
        });
    }

    Ok((companies, Pagination::new(total, page, limit)))
}

fn insert_children(tx: &Transaction<'_>, company_id: &str, doc: &CompanyDocument) -> Result<(), ApiError> {
    if let Some(machinery) = &doc.machinery {
        for record in machinery {
            tx.execute(
                "INSERT INTO machinery (id, company_id, unit_type, machine_data, quantity)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    Uuid::new_v4().to_string(),
                    company_id,
                    doc.unit_type.as_str(),
                    serde_json::to_string(record)?,
                    quantity_of(record),
                ],
            )?;
        }
    }
    if let Some(services) = &doc.services {
        for entry in services {
            tx.execute(
                "INSERT INTO services (id, company_id, title, description)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    Uuid::new_v4().to_string(),
                    company_id,
                    entry.title,
                    entry.description,
                ],
            )?;
        }
    }
    Ok(())
}

/// Machine count of a validated record; categories whose schema carries no
/// `noOfMachines` field count as one machine.
fn quantity_of(record: &Value) -> i64 {
    record
        .get("noOfMachines")
        .and_then(Value::as_i64)
        .unwrap_or(1)
}

fn load_company(conn: &Connection, id: &str) -> Result<Company, ApiError> {
    let row = conn.query_row(
        "SELECT id, name, contact_number, gst_number, about_company, work_type,
                unit_type, location, unit_sq_feet, production_capacity,
                company_logo, unit_images, certifications, created_at, updated_at
         FROM companies WHERE id = ?1",
        [id],
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, String>(7)?,
                row.get::<_, i64>(8)?,
                row.get::<_, Option<i64>>(9)?,
                row.get::<_, Option<String>>(10)?,
                row.get::<_, String>(11)?,
                row.get::<_, String>(12)?,
                row.get::<_, String>(13)?,
                row.get::<_, String>(14)?,
            ))
        },
    )?;

    let mut stmt = conn.prepare(
        "SELECT id, company_id, unit_type, machine_data, quantity
         FROM machinery WHERE company_id = ?1",
    )?;
    let machinery_rows = stmt.query_map([id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, i64>(4)?,
        ))
    })?;
    let mut machinery = Vec::new();
    for m in machinery_rows {
        let (mid, company_id, unit_type, machine_data, quantity) = m?;
        machinery.push(Machinery {
            id: mid,
            company_id,
            unit_type: parse_unit_type(&unit_type)?,
            machine_data: serde_json::from_str(&machine_data)?,
            quantity,
        });
    }

    let mut stmt = conn.prepare(
        "SELECT id, company_id, title, description FROM services WHERE company_id = ?1",
    )?;
    let service_rows = stmt.query_map([id], |row| {
        Ok(ServiceRecord {
            id: row.get(0)?,
            company_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
        })
    })?;
    let mut services = Vec::new();
    for s in service_rows {
        services.push(s?);
    }

    let (
        id,
        name,
        contact_number,
        gst_number,
        about_company,
        work_type,
        unit_type,
        location,
        unit_sq_feet,
        production_capacity,
        company_logo,
        unit_images,
        certifications,
        created_at,
        updated_at,
    ) = row;

    Ok(Company {
        id,
        name,
        contact_number,
        gst_number,
        about_company,
        work_type: parse_work_type(&work_type)?,
        unit_type: parse_unit_type(&unit_type)?,
        location: serde_json::from_str::<Location>(&location)?,
        unit_sq_feet,
        production_capacity,
        company_logo,
        unit_images: serde_json::from_str::<Vec<String>>(&unit_images)?,
        certifications: serde_json::from_str::<Vec<Certification>>(&certifications)?,
        machinery,
        services,
        created_at,
        updated_at,
    })
}

fn parse_unit_type(s: &str) -> Result<UnitType, ApiError> {
    serde_json::from_value(Value::String(s.to_string())).map_err(ApiError::from)
}

fn parse_work_type(s: &str) -> Result<WorkType, ApiError> {
    serde_json::from_value(Value::String(s.to_string())).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::validation::company::{validate_company, CompanyDraft};
    use crate::validation::merge::merge_into_draft;
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
            services: Some(json!([
                { "title": "Job work", "description": "Weaving on order" }
            ])),
            ..CompanyDraft::default()
        }
    }

    fn machinery_row_count(conn: &Connection, company_id: &str) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM machinery WHERE company_id = ?1",
            [company_id],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn create_persists_the_whole_aggregate() {
        let mut conn = db::open_in_memory().unwrap();
        let doc = validate_company(&weaving_draft()).unwrap();
        let company = create_company(&mut conn, &doc).unwrap();

        assert_eq!(company.name, "Sri Lakshmi Textiles");
        assert_eq!(company.machinery.len(), 1);
        assert_eq!(company.machinery[0].quantity, 3);
        assert_eq!(company.machinery[0].unit_type, UnitType::WeavingUnit);
        assert_eq!(company.services.len(), 1);
        assert_eq!(company.location.city.as_deref(), Some("Tiruppur"));
    }

    #[test]
    fn invalid_machinery_writes_no_rows() {
        let conn = db::open_in_memory().unwrap();
        let mut draft = weaving_draft();
        draft.machinery = Some(json!([
            { "machineType": "Rapier Loom", "typeOfYarn": "Cotton", "noOfMachines": -1 }
        ]));
        let issues = validate_company(&draft).unwrap_err();
        assert!(issues.iter().any(|i| i.path == "machinery[0].noOfMachines"));

        let companies: i64 = conn
            .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(companies, 0);
    }

    #[test]
    fn replace_swaps_the_machinery_set_atomically() {
        let mut conn = db::open_in_memory().unwrap();
        let doc = validate_company(&weaving_draft()).unwrap();
        let company = create_company(&mut conn, &doc).unwrap();
        let old_ids: Vec<String> = company.machinery.iter().map(|m| m.id.clone()).collect();

        let mut draft = weaving_draft();
        draft.machinery = Some(json!([
            { "machineType": "Air Jet Loom", "typeOfYarn": "Cotton", "noOfMachines": 2 },
            { "machineType": "Rapier Loom", "typeOfYarn": "Viscose/Spun", "noOfMachines": 4 }
        ]));
        let doc = validate_company(&draft).unwrap();
        let updated = replace_company(&mut conn, &company.id, &doc)
            .unwrap()
            .expect("company exists");

        assert_eq!(updated.machinery.len(), 2);
        for m in &updated.machinery {
            assert!(!old_ids.contains(&m.id), "old machinery row survived the edit");
        }
        assert_eq!(machinery_row_count(&conn, &company.id), 2);
    }

    #[test]
    fn replace_without_child_lists_leaves_children_alone() {
        let mut conn = db::open_in_memory().unwrap();
        let doc = validate_company(&weaving_draft()).unwrap();
        let company = create_company(&mut conn, &doc).unwrap();

        let mut draft = weaving_draft();
        draft.name = Some("Renamed Mills".into());
        draft.machinery = None;
        draft.services = None;
        let doc = validate_company(&draft).unwrap();
        let updated = replace_company(&mut conn, &company.id, &doc)
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Renamed Mills");
        assert_eq!(updated.machinery.len(), 1);
        assert_eq!(updated.machinery[0].id, company.machinery[0].id);
        assert_eq!(updated.services.len(), 1);
    }

    #[test]
    fn replace_unknown_id_reports_not_found_without_writes() {
        let mut conn = db::open_in_memory().unwrap();
        let doc = validate_company(&weaving_draft()).unwrap();
        let result = replace_company(&mut conn, "missing", &doc).unwrap();
        assert!(result.is_none());
        let companies: i64 = conn
            .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(companies, 0);
    }

    #[test]
    fn unit_type_change_without_resubmission_clears_machinery() {
        let mut conn = db::open_in_memory().unwrap();
        let doc = validate_company(&weaving_draft()).unwrap();
        let company = create_company(&mut conn, &doc).unwrap();
        assert_eq!(machinery_row_count(&conn, &company.id), 1);

        let incoming = CompanyDraft {
            unit_type: Some("KNITTING_UNIT".into()),
            ..CompanyDraft::default()
        };
        let effective = merge_into_draft(&company, incoming);
        let doc = validate_company(&effective).unwrap();
        let updated = replace_company(&mut conn, &company.id, &doc)
            .unwrap()
            .unwrap();

        assert_eq!(updated.unit_type, UnitType::KnittingUnit);
        assert!(updated.machinery.is_empty());
        assert_eq!(machinery_row_count(&conn, &company.id), 0);
    }

    #[test]
    fn delete_reports_child_counts_then_not_found() {
        let mut conn = db::open_in_memory().unwrap();
        let mut draft = weaving_draft();
        draft.machinery = Some(json!([
            { "machineType": "Rapier Loom", "typeOfYarn": "Cotton", "noOfMachines": 3 },
            { "machineType": "Hand Loom", "typeOfYarn": "Cotton", "noOfMachines": 1 }
        ]));
        let doc = validate_company(&draft).unwrap();
        let company = create_company(&mut conn, &doc).unwrap();

        let summary = delete_company(&mut conn, &company.id)
            .unwrap()
            .expect("company exists");
        assert_eq!(summary.deleted_machinery, 2);
        assert_eq!(summary.deleted_services, 1);

        assert!(fetch_company(&conn, &company.id).unwrap().is_none());
        assert_eq!(machinery_row_count(&conn, &company.id), 0);
        assert!(delete_company(&mut conn, &company.id).unwrap().is_none());
    }

    #[test]
    fn list_filters_and_paginates() {
        let mut conn = db::open_in_memory().unwrap();
        for i in 0..3 {
            let mut draft = weaving_draft();
            draft.name = Some(format!("Mill {i}"));
            if i == 2 {
                draft.unit_type = Some("KNITTING_UNIT".into());
                draft.machinery = Some(json!([]));
            }
            let doc = validate_company(&draft).unwrap();
            create_company(&mut conn, &doc).unwrap();
        }

        let (all, pagination) =
            list_companies(&conn, &CompanyFilters::default(), 1, 10).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(pagination.total, 3);
        assert_eq!(pagination.total_pages, 1);

        let filters = CompanyFilters {
            unit_type: Some("WEAVING_UNIT".into()),
            ..CompanyFilters::default()
        };
        let (weaving, _) = list_companies(&conn, &filters, 1, 10).unwrap();
        assert_eq!(weaving.len(), 2);

        let filters = CompanyFilters {
            location: Some("Tirup".into()),
            ..CompanyFilters::default()
        };
        let (by_city, _) = list_companies(&conn, &filters, 1, 10).unwrap();
        assert_eq!(by_city.len(), 3);

        let (page_two, pagination) =
            list_companies(&conn, &CompanyFilters::default(), 2, 2).unwrap();
        assert_eq!(page_two.len(), 1);
        assert_eq!(pagination.total_pages, 2);
    }

    #[test]
    fn name_filter_ignores_ascii_case() {
        let mut conn = db::open_in_memory().unwrap();
        let doc = validate_company(&weaving_draft()).unwrap();
        create_company(&mut conn, &doc).unwrap();

        let filters = CompanyFilters {
            name: Some("lakshmi".into()),
            ..CompanyFilters::default()
        };
        let (matched, _) = list_companies(&conn, &filters, 1, 10).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Sri Lakshmi Textiles");

        let filters = CompanyFilters {
            name: Some("loomworks".into()),
            ..CompanyFilters::default()
        };
        let (matched, _) = list_companies(&conn, &filters, 1, 10).unwrap();
        assert!(matched.is_empty());
    }
}
