// src/application/ports/media.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// A stored media object as returned by the hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub url: String,
    pub public_id: String,
}

/// External object storage for avatars and cover images. Uploads are
/// required to succeed for the calling operation to proceed; deletes of
/// replaced assets are best-effort and must not fail the caller.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: Bytes) -> ApplicationResult<MediaAsset>;

    async fn delete_by_public_id(&self, public_id: &str) -> ApplicationResult<()>;
}

/// Derive the hosting service's public id from a stored asset URL
/// (last path segment, extension stripped).
pub fn public_id_from_url(url: &str) -> Option<&str> {
    let segment = url.rsplit('/').next()?;
    let public_id = segment.split('.').next()?;
    if public_id.is_empty() {
        None
    } else {
        Some(public_id)
    }
}

#[cfg(test)]
mod tests {
    use super::public_id_from_url;

    #[test]
    fn extracts_public_id_from_asset_url() {
        let url = "https://res.example.com/demo/image/upload/v123/abc123.png";
        assert_eq!(public_id_from_url(url), Some("abc123"));
    }

    #[test]
    fn handles_urls_without_extension() {
        assert_eq!(public_id_from_url("https://host/x/y/raw"), Some("raw"));
        assert_eq!(public_id_from_url(""), None);
    }
}
