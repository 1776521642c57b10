use leptos::prelude::*;

const SERVICES: [(&str, &str); 4] = [
    ("Appraisal", "Dating and attribution of ceramics, jade, bronze and paintings by our specialists."),
    ("Authentication", "Material and provenance research with a written report for each piece."),
    ("Conservation", "Cleaning, stabilisation and mounting carried out by trained conservators."),
    ("Consignment", "Sale of selected pieces through the gallery and its catalog."),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page services">
            <h1>"Services"</h1>
            <ul class="services__list">
                {SERVICES.into_iter().map(|(title, text)| view! {
                    <li>
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
