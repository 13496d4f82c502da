pub mod rest;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("storage rejected upload ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload raw bytes as a new object. With `overwrite` false, an existing
    /// object under the same name rejects the upload.
    async fn upload(
        &self,
        bucket: &str,
        object: &str,
        bytes: Vec<u8>,
        content_type: &str,
        overwrite: bool,
    ) -> Result<(), StorageError>;

    /// Publicly reachable URL for an object. Pure name resolution, no I/O.
    fn public_url(&self, bucket: &str, object: &str) -> String;
}
