use crate::domain::a001_collection_item::service::use_collection_service;
use crate::shared::config::DataMode;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum SourceStatus {
    Live,
    MockFallback,
}

impl SourceStatus {
    fn display_text(&self) -> &'static str {
        match self {
            SourceStatus::Live => "Live collection data",
            SourceStatus::MockFallback => "Development build: sample data when the backend is offline",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            SourceStatus::Live => "status-online",
            SourceStatus::MockFallback => "status-checking",
        }
    }
}

impl From<DataMode> for SourceStatus {
    fn from(mode: DataMode) -> Self {
        match mode {
            DataMode::Live => SourceStatus::Live,
            DataMode::MockFallback => SourceStatus::MockFallback,
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = SourceStatus::from(use_collection_service().mode());

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="footer__copyright">"© Yunjian Collection"</span>
            <span class=status.css_class()>{status.display_text()}</span>
        </footer>
    }
}
