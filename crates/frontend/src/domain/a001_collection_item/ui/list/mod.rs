use crate::domain::a001_collection_item::service::use_collection_service;
use crate::domain::a001_collection_item::ui::card::CollectionItemCard;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use contracts::enums::Category;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CollectionItemList(category: Category) -> impl IntoView {
    let service = use_collection_service();
    let (items, set_items) = signal::<Vec<CollectionItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    let fetch = move || {
        let service = service.clone();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match service.list_items(category.slug()).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let refetch = fetch.clone();
    fetch();

    view! {
        <div class="page collection-list">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">{category.display_name()}</h1>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refetch()>
                    "Refresh"
                </Button>
            </Flex>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }.into_any()
                } else if items.with(|v| v.is_empty()) {
                    view! { <p class="empty">"No pieces in this collection yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="item-grid">
                            <For
                                each=move || items.get()
                                key=|item| item.id
                                children=move |item| view! { <CollectionItemCard category=category item=item /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
