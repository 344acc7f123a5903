//! S3/MinIO-backed blob store for uploaded resume files.

use std::path::Path;

use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Clone)]
pub struct BlobStore {
    client: S3Client,
    bucket: String,
    endpoint: String,
}

impl BlobStore {
    pub fn new(client: S3Client, bucket: String, endpoint: String) -> Self {
        Self {
            client,
            bucket,
            endpoint,
        }
    }

    /// Uploads a spooled file and returns its public URL.
    pub async fn upload(
        &self,
        path: &Path,
        key: &str,
        content_type: &str,
    ) -> Result<String, AppError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to read spooled upload: {e}")))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Uploaded resume to s3://{}/{}", self.bucket, key);
        Ok(self.public_url(key))
    }

    /// Removes an object. Callers decide whether a failure is fatal.
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 delete failed: {e}")))?;

        info!("Deleted s3://{}/{}", self.bucket, key);
        Ok(())
    }

    /// Path-style URL, which MinIO serves directly.
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.bucket,
            key
        )
    }
}

/// Blob key for a fresh upload: `resumes/{uuid}.{ext}`.
pub fn object_key(file_name: &str) -> String {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("pdf")
        .to_lowercase();
    format!("resumes/{}.{ext}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> BlobStore {
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .build();
        BlobStore::new(
            S3Client::from_conf(conf),
            "resumes-bucket".to_string(),
            "http://localhost:9000/".to_string(),
        )
    }

    #[test]
    fn test_object_key_shape() {
        let key = object_key("My Resume.pdf");
        assert!(key.starts_with("resumes/"));
        assert!(key.ends_with(".pdf"));
    }

    #[test]
    fn test_object_key_lowercases_extension() {
        assert!(object_key("RESUME.PDF").ends_with(".pdf"));
        assert!(object_key("Resume.DOCX").ends_with(".docx"));
    }

    #[test]
    fn test_object_keys_are_unique() {
        assert_ne!(object_key("a.pdf"), object_key("a.pdf"));
    }

    #[test]
    fn test_public_url_joins_without_double_slash() {
        let store = test_store();
        assert_eq!(
            store.public_url("resumes/abc.pdf"),
            "http://localhost:9000/resumes-bucket/resumes/abc.pdf"
        );
    }
}
