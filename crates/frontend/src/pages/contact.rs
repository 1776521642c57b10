use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page contact">
            <h1>"Contact"</h1>
            <dl class="contact__details">
                <dt>"Gallery"</dt>
                <dd>"Open Tuesday to Sunday, 10:00-18:00, viewings by appointment"</dd>
                <dt>"Email"</dt>
                <dd><a href="mailto:gallery@yunjian.example">"gallery@yunjian.example"</a></dd>
            </dl>
        </div>
    }
}
