use contracts::enums::Category;
use leptos::prelude::*;
use leptos_router::components::A;

/// "Collections" drop-down with one card per category
#[component]
pub fn MegaMenuCategory(label: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div
            class="mega-menu-category"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="mega-menu-btn"
                class:mega-menu-btn-active=move || is_open.get()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span>{label}</span>
                <span
                    class="mega-menu-chevron"
                    class:mega-menu-chevron-open=move || is_open.get()
                >
                    "▾"
                </span>
            </button>

            <div
                class="mega-menu-panel"
                class:mega-menu-panel-open=move || is_open.get()
                on:click=move |_| set_is_open.set(false)
            >
                <div class="mega-menu-content mega-menu-grid-2">
                    {Category::all().into_iter().map(|category| {
                        view! {
                            <A href=format!("/{}", category.slug())>
                                <div class="mega-menu-card">
                                    <div class="mega-menu-card-title">
                                        {category.display_name()}
                                    </div>
                                </div>
                            </A>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
