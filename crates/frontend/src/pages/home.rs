use crate::domain::a001_collection_item::service::use_collection_service;
use crate::domain::a001_collection_item::ui::card::CollectionItemCard;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use contracts::enums::Category;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// True while some category request has not settled yet
fn is_loading(pending: usize) -> bool {
    pending > 0
}

/// Featured pieces in category order
fn sort_featured(entries: &mut [(Category, CollectionItem)]) {
    entries.sort_by_key(|(category, item)| {
        let position = Category::all().iter().position(|c| c == category);
        (position, item.id)
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let service = use_collection_service();
    let featured = RwSignal::new(Vec::<(Category, CollectionItem)>::new());
    let pending = RwSignal::new(Category::all().len());

    // One request per category; they complete in any order.
    for category in Category::all() {
        let service = service.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(items) = service.list_items(category.slug()).await {
                featured.update(|entries| {
                    entries.extend(
                        items
                            .into_iter()
                            .filter(|item| item.featured)
                            .map(|item| (category, item)),
                    );
                    sort_featured(entries);
                });
            }
            pending.update(|n| *n = n.saturating_sub(1));
        });
    }

    view! {
        <div class="page home">
            <section class="home__hero">
                <h1>"Yunjian Collection"</h1>
                <p>"Ceramics, jade, bronzes and calligraphy from three thousand years of Chinese craft."</p>
            </section>

            <section class="home__categories">
                <Flex gap=FlexGap::Large style="flex-wrap: wrap;">
                    {Category::all().into_iter().map(|category| view! {
                        <A href=format!("/{}", category.slug())>
                            <Card>
                                <span class="home__category-title">{category.display_name()}</span>
                            </Card>
                        </A>
                    }).collect_view()}
                </Flex>
            </section>

            <section class="home__featured">
                <h2>"Featured pieces"</h2>
                <Show when=move || { is_loading(pending.get()) }>
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                        <Spinner />
                        <span>"Loading..."</span>
                    </Flex>
                </Show>
                <div class="item-grid">
                    <For
                        each=move || featured.get()
                        key=|(category, item)| (*category, item.id)
                        children=|(category, item)| view! { <CollectionItemCard category=category item=item /> }
                    />
                </div>
            </section>
        </div>
    }
}
