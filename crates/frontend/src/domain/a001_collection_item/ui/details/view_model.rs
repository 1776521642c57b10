use crate::domain::a001_collection_item::service::CollectionService;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use contracts::enums::Category;
use leptos::prelude::*;

/// ViewModel for the item details page
#[derive(Clone, Copy)]
pub struct CollectionItemDetailsViewModel {
    pub item: RwSignal<Option<CollectionItem>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl CollectionItemDetailsViewModel {
    pub fn new() -> Self {
        Self {
            item: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    /// Nothing to show once loading finished without an item or an error
    pub fn is_missing(self) -> impl Fn() -> bool + Send + Sync + 'static {
        move || {
            !self.loading.get()
                && self.error.with(|e| e.is_none())
                && self.item.with(|i| i.is_none())
        }
    }

    /// Title of the category the item belongs to, or the raw slug
    pub fn category_title(category: &str) -> String {
        Category::from_slug(category)
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| category.to_string())
    }

    pub fn load(&self, service: CollectionService, category: String, id: String) {
        let item = self.item;
        let error = self.error;
        let loading = self.loading;
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match service.get_item_detail(&category, &id).await {
                Ok(found) => {
                    item.set(found);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load item: {}", e))),
            }
            loading.set(false);
        });
    }
}

impl Default for CollectionItemDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
