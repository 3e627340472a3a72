//! Object uploads. Files land under `{uploads_dir}/{category}/` with a
//! uuid-prefixed name and are served back under `/uploads`.
//!
//! A single required upload (the company logo) failing is a hard failure of
//! the whole operation. Batch image uploads are best-effort: the subset that
//! succeeded is returned and a shortfall is only logged. Uploads happen
//! before validation, so objects stored for a request that later fails
//! validation are left behind; nothing cleans them up.

use crate::config;
use crate::error::ApiError;
use crate::services::forms::FilePart;
use log::warn;
use std::fs;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Stores one file and returns its public URL. Any I/O failure is a hard
/// failure.
pub fn store_file(file: &FilePart, category: &str) -> Result<String, ApiError> {
    let dir = Path::new(&config::uploads_dir()).join(category);
    fs::create_dir_all(&dir)
        .map_err(|e| ApiError::Upload(format!("Failed to upload {}: {e}", file.field)))?;

    let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize(&file.filename));
    let path = dir.join(&stored_name);
    let mut out = fs::File::create(&path)
        .map_err(|e| ApiError::Upload(format!("Failed to upload {}: {e}", file.field)))?;
    out.write_all(&file.bytes)
        .map_err(|e| ApiError::Upload(format!("Failed to upload {}: {e}", file.field)))?;

    Ok(format!(
        "{}/uploads/{}/{}",
        config::public_base_url(),
        category,
        stored_name
    ))
}

/// Best-effort batch upload: returns the URLs that made it.
pub fn store_many(files: &[&FilePart], category: &str) -> Vec<String> {
    let urls: Vec<String> = files
        .iter()
        .filter_map(|file| store_file(file, category).ok())
        .collect();

    if urls.len() != files.len() {
        warn!(
            "Some {category} images failed to upload. Expected: {}, Got: {}",
            files.len(),
            urls.len()
        );
    }
    urls
}

/// Keeps stored names filesystem- and URL-safe.
fn sanitize(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}
