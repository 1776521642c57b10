use super::view_model::CollectionItemDetailsViewModel;
use crate::domain::a001_collection_item::service::use_collection_service;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn CollectionItemDetails(category: String, id: String) -> impl IntoView {
    let service = use_collection_service();
    let vm = CollectionItemDetailsViewModel::new();
    let back_href = format!("/{}", category);
    let category_title = CollectionItemDetailsViewModel::category_title(&category);
    vm.load(service.clone(), category, id);

    view! {
        <div class="page item-details">
            <A href=back_href>{format!("← {}", category_title)}</A>

            <Show when=move || vm.loading.get()>
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                    <Spinner />
                    <span>"Loading..."</span>
                </Flex>
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=vm.is_missing()>
                <p class="empty">"This piece could not be found."</p>
            </Show>

            {move || vm.item.get().map(|item| {
                let image_url = service.resolve_image_url(&item.image);
                let gradient_class = format!("item-details__image bg-gradient-to-br {}", item.image_gradient);
                view! {
                    <div class="item-details__layout">
                        <div class=gradient_class>
                            <img src=image_url alt=item.name.clone() />
                        </div>
                        <div class="item-details__info">
                            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                                <h1>{item.name.clone()}</h1>
                                {item.featured.then(|| view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"Featured"</Badge>
                                })}
                            </Flex>
                            <dl class="item-details__fields">
                                <dt>"Period"</dt><dd>{item.dynasty.clone()}</dd>
                                <dt>"Date"</dt><dd>{item.year.clone()}</dd>
                                <dt>"Dimensions"</dt><dd>{item.size.clone()}</dd>
                                <dt>"Provenance"</dt><dd>{item.provenance.clone()}</dd>
                                <dt>"Price"</dt><dd>{item.price.clone()}</dd>
                            </dl>
                            <p class="item-details__description">{item.description.clone()}</p>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
