use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use leptos::prelude::*;
use std::sync::Arc;

use super::image;
use super::source::{CollectionSource, MockFallbackSource, RemoteSource};
use crate::shared::api::{ApiError, HttpClient};
use crate::shared::config::{Config, DataMode};

/// Entry point for pages: the four catalog operations over the configured source
#[derive(Clone)]
pub struct CollectionService {
    source: Arc<dyn CollectionSource>,
    image_base: String,
    mode: DataMode,
}

impl CollectionService {
    pub fn new(source: Arc<dyn CollectionSource>, image_base: impl Into<String>, mode: DataMode) -> Self {
        Self {
            source,
            image_base: image_base.into(),
            mode,
        }
    }

    /// Wire the source for the configured data mode
    pub fn from_config(config: &Config) -> Self {
        let remote = RemoteSource::new(HttpClient::new(&config.api));
        let mode = config.data_mode();
        let source: Arc<dyn CollectionSource> = match mode {
            DataMode::Live => Arc::new(remote),
            DataMode::MockFallback => Arc::new(MockFallbackSource::new(remote)),
        };
        log::info!("Collection source: {:?}", mode);
        Self::new(source, config.api.image_base_url.clone(), mode)
    }

    pub fn mode(&self) -> DataMode {
        self.mode
    }

    pub async fn list_items(&self, category: &str) -> Result<Vec<CollectionItem>, ApiError> {
        self.source.list_items(category).await.inspect_err(|e| {
            log::error!("Failed to load {}: {}", category, e);
        })
    }

    /// `Ok(None)` only happens with mock data; the live backend reports a
    /// missing item as an error.
    pub async fn get_item_detail(
        &self,
        category: &str,
        id: &str,
    ) -> Result<Option<CollectionItem>, ApiError> {
        self.source.item_detail(category, id).await.inspect_err(|e| {
            log::error!("Failed to load {}/{}: {}", category, id, e);
        })
    }

    pub fn resolve_image_url(&self, path: &str) -> String {
        image::resolve_image_url(&self.image_base, path)
    }

    /// Best effort: failures are logged and yield an empty list
    pub async fn list_uploaded_images(&self) -> Vec<String> {
        match self.source.uploaded_images().await {
            Ok(images) => images,
            Err(e) => {
                log::error!("Failed to list uploaded images, using empty list: {}", e);
                Vec::new()
            }
        }
    }
}

/// Fetch the service registered by `App`
pub fn use_collection_service() -> CollectionService {
    use_context::<CollectionService>().expect("CollectionService not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection_item::mock::mock_items;
    use crate::domain::a001_collection_item::source::tests::{sample_item, Fixed, Serving, Unreachable};
    use contracts::enums::Category;
    use futures::executor::block_on;

    fn live(source: impl CollectionSource + 'static) -> CollectionService {
        CollectionService::new(Arc::new(source), "/", DataMode::Live)
    }

    fn with_fallback(source: impl CollectionSource + 'static) -> CollectionService {
        CollectionService::new(
            Arc::new(MockFallbackSource::new(source)),
            "/",
            DataMode::MockFallback,
        )
    }

    #[test]
    fn test_backend_down_in_dev_returns_mock_data() {
        let service = with_fallback(Unreachable(ApiError::NoResponse));
        for category in Category::all() {
            let items = block_on(service.list_items(category.slug())).unwrap();
            assert_eq!(items, mock_items(category));
        }
        let jade = block_on(service.get_item_detail("jades", "1")).unwrap();
        assert_eq!(jade.map(|i| i.id), Some(1));
        assert_eq!(block_on(service.get_item_detail("jades", "999")).unwrap(), None);
    }

    #[test]
    fn test_live_mode_propagates_errors() {
        let service = live(Unreachable(ApiError::Status(404)));
        let err = block_on(service.list_items("ceramics")).unwrap_err();
        assert_eq!(err.to_string(), "resource not found");

        let err = block_on(service.get_item_detail("ceramics", "1")).unwrap_err();
        assert_eq!(err, ApiError::Status(404));
    }

    #[test]
    fn test_live_mode_null_payloads() {
        let service = live(Serving(None));
        let err = block_on(service.get_item_detail("jades", "1")).unwrap_err();
        assert_eq!(err, ApiError::EmptyPayload);
        assert_eq!(err.to_string(), "API returned empty data");

        assert!(block_on(service.list_items("jades")).unwrap().is_empty());
        assert!(block_on(service.list_uploaded_images()).is_empty());
    }

    #[test]
    fn test_live_mode_returns_backend_items() {
        let service = live(Fixed(vec![sample_item(5), sample_item(6)]));
        let items = block_on(service.list_items("bronzes")).unwrap();
        assert_eq!(items.len(), 2);
        let item = block_on(service.get_item_detail("bronzes", "6")).unwrap();
        assert_eq!(item.map(|i| i.id), Some(6));
    }

    #[test]
    fn test_uploaded_images_never_fail() {
        for service in [
            live(Unreachable(ApiError::NoResponse)),
            with_fallback(Unreachable(ApiError::Status(503))),
        ] {
            assert!(block_on(service.list_uploaded_images()).is_empty());
        }

        let service = live(Fixed(vec![sample_item(1)]));
        assert_eq!(block_on(service.list_uploaded_images()), vec!["bronze_001.jpg".to_string()]);
    }

    #[test]
    fn test_resolve_image_url_uses_image_base() {
        let service = CollectionService::new(
            Arc::new(Unreachable(ApiError::NoResponse)),
            "https://img.example/",
            DataMode::Live,
        );
        assert_eq!(
            service.resolve_image_url("foo.jpg"),
            "https://img.example/uploads/foo.jpg"
        );
        assert_eq!(
            service.resolve_image_url(""),
            "https://img.example/uploads/default.jpg"
        );
    }

    #[test]
    fn test_from_config_follows_data_mode() {
        let service = CollectionService::from_config(&Config::default());
        assert_eq!(service.mode(), Config::default().data_mode());
    }
}
