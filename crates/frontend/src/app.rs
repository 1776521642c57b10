use crate::domain::a001_collection_item::service::CollectionService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, Config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid embedded configuration, using defaults: {}", e);
        Config::default()
    });

    // The data source is picked once here and shared through context.
    provide_context(CollectionService::from_config(&config));

    view! {
        <AppRoutes />
    }
}
