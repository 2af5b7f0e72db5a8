use super::audio_storage_repository::{split_object_path, AudioStorageRepository, BucketSpec, StorageError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};

/// Upper bound for one folder listing page; the filename search keeps results small
const LIST_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct StorageObject {
    name: String,
}

/// Supabase Storage REST implementation of the audio storage repository.
/// Every call is authorized with the service-role key.
pub struct SupabaseStorageRepository {
    storage_url: String,
    service_key: String,
    http_client: reqwest::Client,
}

impl SupabaseStorageRepository {
    pub fn new(supabase_url: &str, service_key: String) -> Self {
        Self {
            storage_url: format!("{}/storage/v1", supabase_url.trim_end_matches('/')),
            service_key,
            http_client: reqwest::Client::new(),
        }
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
    }

    fn object_url(&self, scope: &str, bucket: &str, path: &str) -> String {
        format!(
            "{}/object/{}{}/{}",
            self.storage_url,
            scope,
            urlencoding::encode(bucket),
            encode_object_path(path)
        )
    }

    async fn failure(response: reqwest::Response) -> StorageError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        classify_failure(status, &body)
    }
}

#[async_trait]
impl AudioStorageRepository for SupabaseStorageRepository {
    async fn ensure_bucket(&self, spec: &BucketSpec) -> Result<(), StorageError> {
        let response = self
            .authorized(self.http_client.get(format!(
                "{}/bucket/{}",
                self.storage_url,
                urlencoding::encode(&spec.name)
            )))
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(format!("bucket lookup failed: {}", e)))?;

        if response.status().is_success() {
            return Ok(());
        }

        match Self::failure(response).await {
            StorageError::NotFound => {}
            other => return Err(other),
        }

        let payload = json!({
            "id": spec.name,
            "name": spec.name,
            "public": spec.public,
            "allowed_mime_types": spec.allowed_mime_types,
            "file_size_limit": spec.file_size_limit,
        });

        let response = self
            .authorized(self.http_client.post(format!("{}/bucket", self.storage_url)))
            .json(&payload)
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(format!("bucket creation failed: {}", e)))?;

        if response.status().is_success() {
            tracing::info!(bucket = %spec.name, "Storage bucket created");
            return Ok(());
        }

        match Self::failure(response).await {
            // Someone else created it between our lookup and create
            StorageError::AlreadyExists => Ok(()),
            other => Err(other),
        }
    }

    async fn exists(&self, bucket: &str, path: &str) -> Result<bool, StorageError> {
        let (folder, file_name) = split_object_path(path);

        let response = self
            .authorized(self.http_client.post(format!(
                "{}/object/list/{}",
                self.storage_url,
                urlencoding::encode(bucket)
            )))
            .json(&json!({
                "prefix": folder,
                "search": file_name,
                "limit": LIST_PAGE_SIZE,
                "offset": 0,
            }))
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(format!("object listing failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let objects: Vec<StorageObject> = response
            .json()
            .await
            .map_err(|e| StorageError::Unavailable(format!("invalid listing response: {}", e)))?;

        Ok(objects.iter().any(|object| object.name == file_name))
    }

    async fn upload_create_only(
        &self,
        bucket: &str,
        path: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let size = data.len();
        let response = self
            .authorized(self.http_client.post(self.object_url("", bucket, path)))
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(format!("upload failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        tracing::debug!(bucket, path, size, "Object uploaded");
        Ok(())
    }

    async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        let response = self
            .authorized(self.http_client.get(self.object_url("authenticated/", bucket, path)))
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(format!("download failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::Unavailable(format!("failed to read object body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

/// Percent-encode each segment of an object path, keeping the separators
fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Map a Supabase Storage error reply onto [`StorageError`].
///
/// Storage often answers 400 with the real code in the body, e.g.
/// `{"statusCode":"409","error":"Duplicate","message":"The resource already exists"}`.
fn classify_failure(status: StatusCode, body: &str) -> StorageError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let inner_status = parsed
        .as_ref()
        .and_then(|v| v.get("statusCode"))
        .and_then(|code| {
            code.as_str()
                .map(str::to_string)
                .or_else(|| code.as_u64().map(|n| n.to_string()))
        });
    let error = parsed
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string());

    if status == StatusCode::CONFLICT
        || inner_status.as_deref() == Some("409")
        || error.eq_ignore_ascii_case("duplicate")
    {
        return StorageError::AlreadyExists;
    }

    if status == StatusCode::NOT_FOUND
        || inner_status.as_deref() == Some("404")
        || error.eq_ignore_ascii_case("not_found")
    {
        return StorageError::NotFound;
    }

    if status.is_server_error() {
        StorageError::Unavailable(format!("{}: {}", status, message))
    } else {
        StorageError::Rejected(format!("{}: {}", status, message))
    }
}
