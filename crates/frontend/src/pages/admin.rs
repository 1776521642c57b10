use crate::domain::a001_collection_item::service::use_collection_service;
use leptos::prelude::*;
use thaw::*;

/// Uploaded image browser
#[component]
pub fn AdminPage() -> impl IntoView {
    let service = use_collection_service();
    let (images, set_images) = signal::<Vec<String>>(Vec::new());
    let (loading, set_loading) = signal(true);

    {
        let service = service.clone();
        wasm_bindgen_futures::spawn_local(async move {
            set_images.set(service.list_uploaded_images().await);
            set_loading.set(false);
        });
    }

    view! {
        <div class="page admin">
            <h1>"Uploaded images"</h1>
            {move || {
                if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }.into_any()
                } else if images.with(|v| v.is_empty()) {
                    view! { <p class="empty">"No uploaded images."</p> }.into_any()
                } else {
                    let service = service.clone();
                    view! {
                        <div class="image-grid">
                            {images.get().into_iter().map(|name| {
                                let url = service.resolve_image_url(&name);
                                view! {
                                    <figure>
                                        <img src=url.clone() alt=name.clone() loading="lazy" />
                                        <figcaption><a href=url target="_blank">{name}</a></figcaption>
                                    </figure>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
