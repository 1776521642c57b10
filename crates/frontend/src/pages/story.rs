use leptos::prelude::*;

#[component]
pub fn StoryPage() -> impl IntoView {
    view! {
        <div class="page story">
            <h1>"Our Story"</h1>
            <p>
                "The collection began with a single Song dynasty celadon bowl found in a family "
                "storeroom. Three generations later it holds ceramics, jade, bronzes and works of "
                "calligraphy, each one researched, documented and cared for."
            </p>
            <p>
                "We believe antiques should be seen, not locked away. Every piece in the catalog "
                "can be viewed by appointment in our gallery."
            </p>
        </div>
    }
}
