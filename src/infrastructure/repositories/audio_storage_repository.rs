use async_trait::async_trait;

/// Declared policy for a storage bucket
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSpec {
    pub name: String,
    pub public: bool,
    pub allowed_mime_types: Vec<String>,
    pub file_size_limit: u64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// A create-only write found the object already present
    #[error("object already exists")]
    AlreadyExists,
    #[error("object not found")]
    NotFound,
    /// The store refused the request (policy, size, mime type)
    #[error("storage rejected request: {0}")]
    Rejected(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Bucket-oriented object storage used as the audio cache.
///
/// Objects are immutable once written: `upload_create_only` must fail with
/// [`StorageError::AlreadyExists`] instead of overwriting.
#[async_trait]
pub trait AudioStorageRepository: Send + Sync {
    /// Create the bucket if missing. An existing bucket counts as success.
    async fn ensure_bucket(&self, spec: &BucketSpec) -> Result<(), StorageError>;

    /// Check whether an object exists at `path` by listing its folder
    async fn exists(&self, bucket: &str, path: &str) -> Result<bool, StorageError>;

    async fn upload_create_only(
        &self,
        bucket: &str,
        path: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, StorageError>;
}

/// Split `folder/name.ext` into `("folder", "name.ext")`. Top-level objects get an empty folder.
pub fn split_object_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((folder, name)) => (folder, name),
        None => ("", path),
    }
}
