use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

const JSON: &str = "application/json";

/// Fetch and decode a JSON record.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let bytes = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}

/// Write `value` as a new JSON record at `key`.
///
/// The write is conditional on the key being free (`If-None-Match: *`), so an
/// existing record is never replaced; a taken key yields
/// [`StorageError::AlreadyExists`].
pub async fn create_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;

    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(JSON)
        .body(ByteStream::from(body))
        .if_none_match("*")
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            // 412 Precondition Failed
            if err.to_string().contains("PreconditionFailed") {
                StorageError::AlreadyExists {
                    key: key.to_string(),
                }
            } else {
                StorageError::PutObject(err.to_string())
            }
        })?;

    Ok(())
}

/// The lexicographically greatest key under `prefix`, walking every page.
pub async fn last_key(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Option<String>, StorageError> {
    let mut last: Option<String> = None;
    let mut continuation_token: Option<String> = None;

    loop {
        let resp = client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .set_continuation_token(continuation_token.take())
            .send()
            .await
            .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        let page_max = resp.contents().iter().filter_map(|obj| obj.key()).max();
        if let Some(key) = page_max
            && last.as_deref().is_none_or(|current| key > current)
        {
            last = Some(key.to_string());
        }

        match resp.next_continuation_token() {
            Some(token) if resp.is_truncated() == Some(true) => {
                continuation_token = Some(token.to_string());
            }
            _ => break,
        }
    }

    Ok(last)
}
