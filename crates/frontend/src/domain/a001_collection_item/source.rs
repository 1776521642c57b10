use async_trait::async_trait;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::mock;
use crate::shared::api::client::decode_payload;
use crate::shared::api::{ApiError, HttpClient, Method};

pub(crate) const UPLOADS_PATH: &str = "/uploads";

/// Where collection data comes from. Chosen once at startup.
#[async_trait(?Send)]
pub trait CollectionSource: Send + Sync {
    async fn list_items(&self, category: &str) -> Result<Vec<CollectionItem>, ApiError>;

    async fn item_detail(&self, category: &str, id: &str) -> Result<Option<CollectionItem>, ApiError>;

    async fn uploaded_images(&self) -> Result<Vec<String>, ApiError>;
}

/// Collection backend reached over HTTP
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: HttpClient,
}

impl RemoteSource {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

/// Backend path of a category listing. Slugs come from the URL, so a
/// decoded `/` must not turn into an extra path segment.
pub(crate) fn list_path(category: &str) -> String {
    urlencoding::encode(category).into_owned()
}

pub(crate) fn detail_path(category: &str, id: &str) -> String {
    format!("{}/{}", urlencoding::encode(category), urlencoding::encode(id))
}

/// A null list payload is an empty list
pub(crate) fn list_from_payload<T: DeserializeOwned>(payload: Option<Value>) -> Result<Vec<T>, ApiError> {
    Ok(decode_payload::<Vec<T>>(payload)?.unwrap_or_default())
}

/// A null detail payload is a failure, not a missing item
pub(crate) fn detail_from_payload(payload: Option<Value>) -> Result<Option<CollectionItem>, ApiError> {
    match decode_payload::<CollectionItem>(payload)? {
        Some(item) => Ok(Some(item)),
        None => Err(ApiError::EmptyPayload),
    }
}

#[async_trait(?Send)]
impl CollectionSource for RemoteSource {
    async fn list_items(&self, category: &str) -> Result<Vec<CollectionItem>, ApiError> {
        let payload = self.client.request(&list_path(category), Method::Get).await?;
        list_from_payload(payload)
    }

    async fn item_detail(&self, category: &str, id: &str) -> Result<Option<CollectionItem>, ApiError> {
        let payload = self.client.request(&detail_path(category, id), Method::Get).await?;
        detail_from_payload(payload)
    }

    async fn uploaded_images(&self) -> Result<Vec<String>, ApiError> {
        let payload = self.client.request(UPLOADS_PATH, Method::Get).await?;
        list_from_payload(payload)
    }
}

/// Development wrapper: answers list and detail lookups from the built-in
/// records whenever the wrapped source fails.
#[derive(Debug, Clone)]
pub struct MockFallbackSource<S> {
    inner: S,
}

impl<S: CollectionSource> MockFallbackSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait(?Send)]
impl<S: CollectionSource> CollectionSource for MockFallbackSource<S> {
    async fn list_items(&self, category: &str) -> Result<Vec<CollectionItem>, ApiError> {
        match self.inner.list_items(category).await {
            Ok(items) => Ok(items),
            Err(e) => {
                log::warn!("Failed to load {}, using mock data: {}", category, e);
                Ok(mock::mock_items_by_slug(category).to_vec())
            }
        }
    }

    async fn item_detail(&self, category: &str, id: &str) -> Result<Option<CollectionItem>, ApiError> {
        match self.inner.item_detail(category, id).await {
            Ok(Some(item)) => Ok(Some(item)),
            Ok(None) => Ok(mock::find_mock_item(category, id)),
            Err(e) => {
                log::warn!("Failed to load {}/{}, using mock data: {}", category, id, e);
                Ok(mock::find_mock_item(category, id))
            }
        }
    }

    async fn uploaded_images(&self) -> Result<Vec<String>, ApiError> {
        self.inner.uploaded_images().await
    }
}
