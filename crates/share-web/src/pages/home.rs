use leptos::prelude::*;

use crate::components::ShareTooltip;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <header class="page-header">
                <h1>"Share this page"</h1>
            </header>
            <p>
                "Send the link to a friend. Hover the control to see what it does, "
                "click it to put this page's address on your clipboard."
            </p>
            <ShareTooltip label="share \u{1F517}" />
        </main>
    }
}
