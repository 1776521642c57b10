use crate::layout::header::mega_menu::MegaMenuCategory;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/">
                    <span class="header__title">"Yunjian Collection"</span>
                </A>
                <nav class="header__nav">
                    <MegaMenuCategory label="Collections" />
                    <A href="/story">"Our Story"</A>
                    <A href="/services">"Services"</A>
                    <A href="/contact">"Contact"</A>
                </nav>
            </div>
        </header>
    }
}
