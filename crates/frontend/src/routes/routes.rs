use crate::domain::a001_collection_item::ui::details::CollectionItemDetails;
use crate::domain::a001_collection_item::ui::list::CollectionItemList;
use crate::layout::Shell;
use crate::pages::{AdminPage, ContactPage, HomePage, NotFoundPage, ServicesPage, StoryPage};
use crate::routes::table::{Page, ROUTE_TABLE};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{path, NavigateOptions};

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::CategoryList(category) => view! { <CollectionItemList category=category /> }.into_any(),
        Page::Detail { category, id } => {
            view! { <CollectionItemDetails category=category id=id /> }.into_any()
        }
        Page::Story => view! { <StoryPage /> }.into_any(),
        Page::Services => view! { <ServicesPage /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
        Page::Admin => view! { <AdminPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Resolves the current location through the route table.
///
/// Legacy aliases render their target right away and rewrite the address
/// bar without adding a history entry.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    // The followed page is the same before and after the rewrite, so an alias
    // mounts its target once.
    let page = Memo::new(move |_| ROUTE_TABLE.resolve_page(&location.pathname.get()));

    Effect::new(move |_| {
        if let Some(target) = ROUTE_TABLE.redirect_target(&location.pathname.get()) {
            log::debug!("Redirecting legacy path to {}", target);
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || render_page(page.get())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=RoutedPage />
                    <Route path=path!("/*any") view=RoutedPage />
                </Routes>
            </Shell>
        </Router>
    }
}
