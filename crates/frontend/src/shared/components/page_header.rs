use leptos::prelude::*;

/// PageHeader component - title line with an optional subtitle
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
