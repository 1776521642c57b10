use crate::domain::a001_collection_item::service::use_collection_service;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use contracts::enums::Category;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Thumbnail card linking to the item's detail page
#[component]
pub fn CollectionItemCard(category: Category, item: CollectionItem) -> impl IntoView {
    let service = use_collection_service();
    let href = format!("/{}/{}", category.slug(), item.id);
    let image_url = service.resolve_image_url(&item.image);
    let gradient_class = format!("item-card__image bg-gradient-to-br {}", item.image_gradient);
    let featured = item.featured;
    let alt = item.name.clone();

    view! {
        <A href=href>
            <Card>
                <div class=gradient_class>
                    <img src=image_url alt=alt loading="lazy" />
                </div>
                <Flex vertical=true gap=FlexGap::Small>
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <span class="item-card__name">{item.name}</span>
                        <Show when=move || featured>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                "Featured"
                            </Badge>
                        </Show>
                    </Flex>
                    <span class="item-card__dynasty">{item.dynasty}" · "{item.year}</span>
                    <span class="item-card__price">{item.price}</span>
                </Flex>
            </Card>
        </A>
    }
}
