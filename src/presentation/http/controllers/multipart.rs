// src/presentation/http/controllers/multipart.rs
use crate::application::ports::media::{MediaAsset, MediaStore};
use axum::extract::multipart::Multipart;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;

use super::super::error::{HttpError, HttpResult};

pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Text fields and file parts of a multipart form, collected by field name.
#[derive(Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl FormData {
    pub async fn read(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::bad_request(err.to_string()))?
        {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };

            match field.file_name().map(ToOwned::to_owned) {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|err| HttpError::bad_request(err.to_string()))?;
                    form.files.insert(name, UploadedFile { file_name, bytes });
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|err| HttpError::bad_request(err.to_string()))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn field(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Push the named file, if present, to the media store and hand back the
    /// resulting asset reference.
    pub async fn upload_file(
        &self,
        name: &str,
        media_store: &Arc<dyn MediaStore>,
    ) -> HttpResult<Option<MediaAsset>> {
        let Some(file) = self.files.get(name) else {
            return Ok(None);
        };
        if file.bytes.is_empty() {
            return Ok(None);
        }

        let asset = media_store
            .upload(&file.file_name, file.bytes.clone())
            .await
            .map_err(HttpError::from_error)?;
        Ok(Some(asset))
    }
}
