//! Job post persistence. Single-table, no children, so the only transaction
//! subtlety is delete-and-return.

use crate::error::ApiError;
use crate::validation::job_post::JobPostDocument;
use common::model::company::Certification;
use common::model::job_post::JobPost;
use common::model::pagination::Pagination;
use common::model::unit_type::UnitType;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Default, Clone)]
pub struct JobPostFilters {
    pub unit_type: Option<String>,
    pub location: Option<String>,
}

pub fn create_job_post(conn: &Connection, doc: &JobPostDocument) -> Result<JobPost, ApiError> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO job_posts (id, unit_type, order_quantity, short_description,
            detailed_description, certifications, job_images, location)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            doc.unit_type.as_str(),
            doc.order_quantity,
            doc.short_description,
            doc.detailed_description,
            serde_json::to_string(&doc.certifications)?,
            serde_json::to_string(&doc.job_images)?,
            doc.location,
        ],
    )?;
    fetch_job_post(conn, &id)?.ok_or(ApiError::NotFound("Job post"))
}

pub fn fetch_job_post(conn: &Connection, id: &str) -> Result<Option<JobPost>, ApiError> {
    let row = conn
        .query_row(
            "SELECT id, unit_type, order_quantity, short_description, detailed_description,
                    certifications, job_images, location, created_at
             FROM job_posts WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    row.map(into_job_post).transpose()
}

pub fn delete_job_post(conn: &Connection, id: &str) -> Result<Option<JobPost>, ApiError> {
    let Some(post) = fetch_job_post(conn, id)? else {
        return Ok(None);
    };
    conn.execute("DELETE FROM job_posts WHERE id = ?1", [id])?;
    Ok(Some(post))
}

pub fn list_job_posts(
    conn: &Connection,
    filters: &JobPostFilters,
    page: u64,
    limit: u64,
) -> Result<(Vec<JobPost>, Pagination), ApiError> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(unit) = filters.unit_type.as_deref().filter(|s| !s.is_empty()) {
        clauses.push("unit_type = ?");
        values.push(unit.to_string());
    }
    if let Some(location) = filters.location.as_deref().filter(|s| !s.is_empty()) {
        clauses.push("location LIKE ?");
        values.push(format!("%{location}%"));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let total: u64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM job_posts{where_sql}"),
        rusqlite::params_from_iter(values.iter()),
        |row| row.get(0),
    )?;

    let page = page.max(1);
    let offset = (page - 1) * limit;
    let mut stmt = conn.prepare(&format!(
        "SELECT id, unit_type, order_quantity, short_description, detailed_description,
                certifications, job_images, location, created_at
         FROM job_posts{where_sql}
         ORDER BY created_at DESC
         LIMIT {limit} OFFSET {offset}"
    ))?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values.iter()), map_row)?;

    let mut posts = Vec::new();
    for row in rows {
        posts.push(into_job_post(row?)?);
    }
    Ok((posts, Pagination::new(total, page, limit)))
}

type RawRow = (
    String,
    String,
    i64,
    String,
    Option<String>,
    String,
    String,
    String,
    String,
);

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

fn into_job_post(raw: RawRow) -> Result<JobPost, ApiError> {
    let (
        id,
        unit_type,
        order_quantity,
        short_description,
        detailed_description,
        certifications,
        job_images,
        location,
        created_at,
    ) = raw;
    Ok(JobPost {
        id,
        unit_type: serde_json::from_value::<UnitType>(Value::String(unit_type))?,
        order_quantity,
        short_description,
        detailed_description,
        certifications: serde_json::from_str::<Vec<Certification>>(&certifications)?,
        job_images: serde_json::from_str::<Vec<String>>(&job_images)?,
        location,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::validation::job_post::{validate_job_post, JobPostDraft};

    fn stitching_draft() -> JobPostDraft {
        JobPostDraft {
            unit_type: Some("STITCHING_UNIT".into()),
            order_quantity: Some("5000".into()),
            short_description: Some("T-shirt stitching, 5000 pcs".into()),
            location: Some("Tiruppur".into()),
            certifications: vec!["GOTS".into()],
            ..JobPostDraft::default()
        }
    }

    #[test]
    fn create_fetch_delete_round_trip() {
        let conn = db::open_in_memory().unwrap();
        let doc = validate_job_post(&stitching_draft()).unwrap();
        let post = create_job_post(&conn, &doc).unwrap();
        assert_eq!(post.order_quantity, 5000);

        let fetched = fetch_job_post(&conn, &post.id).unwrap().unwrap();
        assert_eq!(fetched.short_description, post.short_description);

        let deleted = delete_job_post(&conn, &post.id).unwrap().unwrap();
        assert_eq!(deleted.id, post.id);
        assert!(fetch_job_post(&conn, &post.id).unwrap().is_none());
        assert!(delete_job_post(&conn, &post.id).unwrap().is_none());
    }

    #[test]
    fn list_filters_by_unit_type() {
        let conn = db::open_in_memory().unwrap();
        let doc = validate_job_post(&stitching_draft()).unwrap();
        create_job_post(&conn, &doc).unwrap();

        let mut other = stitching_draft();
        other.unit_type = Some("PRINTING_UNIT".into());
        let doc = validate_job_post(&other).unwrap();
        create_job_post(&conn, &doc).unwrap();

        let filters = JobPostFilters {
            unit_type: Some("PRINTING_UNIT".into()),
            ..JobPostFilters::default()
        };
        let (posts, pagination) = list_job_posts(&conn, &filters, 1, 10).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(pagination.total, 1);
    }
}
