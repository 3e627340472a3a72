//! Multipart form intake shared by the company and job-post endpoints.
//!
//! Reads the whole payload up front into text fields and file parts, keyed by
//! their `Content-Disposition` names. Repeated fields (certifications, image
//! files) keep their order of appearance.

use crate::error::ApiError;
use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::collections::HashMap;

/// One uploaded file part, buffered in memory.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// All parts of a multipart request, split into text fields and files.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
    files: Vec<FilePart>,
}

impl FormData {
    pub async fn read(payload: &mut Multipart) -> Result<FormData, ApiError> {
        let mut form = FormData::default();

        while let Some(item) = payload.next().await {
            let mut field =
                item.map_err(|e| ApiError::Upload(format!("failed to read form data: {e}")))?;

            let name = field
                .content_disposition()
                .and_then(|cd| cd.get_name().map(|n| n.to_string()))
                .unwrap_or_default();
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk =
                    chunk.map_err(|e| ApiError::Upload(format!("failed to read form data: {e}")))?;
                bytes.extend_from_slice(&chunk);
            }

            match filename {
                Some(filename) => {
                    // Browsers submit an empty part for untouched file inputs.
                    if !filename.is_empty() || !bytes.is_empty() {
                        form.files.push(FilePart {
                            field: name,
                            filename,
                            bytes,
                        });
                    }
                }
                None => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    form.fields.entry(name).or_default().push(text);
                }
            }
        }

        Ok(form)
    }

    /// First value of a text field, if the field was present at all.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).and_then(|v| v.first()).cloned()
    }

    /// All values of a repeated text field.
    pub fn texts(&self, name: &str) -> Vec<String> {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// All file parts submitted under the given field name.
    pub fn files_for(&self, name: &str) -> Vec<&FilePart> {
        self.files.iter().filter(|f| f.field == name).collect()
    }

    /// Parses a text field as JSON. Absent field is `Ok(None)`; present but
    /// malformed JSON is a validation-shaped failure at the field's path.
    pub fn json(&self, name: &str) -> Result<Option<serde_json::Value>, ApiError> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(_) => Err(ApiError::Validation(vec![
                    common::model::validation::Issue::new(name, "must be valid JSON"),
                ])),
            },
        }
    }
}
