// src/infrastructure/media/cloudinary.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::media::{MediaAsset, MediaStore},
};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Cloudinary-style REST media store. Uploads and destroys are signed with
/// the account secret (SHA-256 over the sorted parameter string).
pub struct CloudinaryMediaStore {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

impl CloudinaryMediaStore {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            cloud_name,
            api_key,
            api_secret,
        }
    }

    fn sign(&self, params: &[(&str, &str)]) -> String {
        // Parameters must be sorted by key before signing.
        let mut sorted: Vec<_> = params.to_vec();
        sorted.sort_by_key(|(key, _)| *key);
        let to_sign: Vec<String> = sorted
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();

        let mut hasher = Sha256::new();
        hasher.update(to_sign.join("&").as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/{action}",
            self.cloud_name
        )
    }
}

#[async_trait]
impl MediaStore for CloudinaryMediaStore {
    async fn upload(&self, file_name: &str, bytes: Bytes) -> ApplicationResult<MediaAsset> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[("timestamp", &timestamp)]);

        let part = reqwest::multipart::Part::bytes(bytes.to_vec()).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "media upload failed with status {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(MediaAsset {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn delete_by_public_id(&self, public_id: &str) -> ApplicationResult<()> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", public_id), ("timestamp", &timestamp)]);

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .form(&[
                ("public_id", public_id),
                ("timestamp", &timestamp),
                ("api_key", &self.api_key),
                ("signature", &signature),
            ])
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "media delete failed with status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
