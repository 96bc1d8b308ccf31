use leptos::prelude::*;

use crate::components::ShareWidget;
use crate::config::SITE;
use crate::session::use_session_identifiers;

#[component]
pub fn HomePage() -> impl IntoView {
    let identifiers = use_session_identifiers();

    view! {
        <main class="page">
            <header class="page-header">
                <h1>{SITE.name}</h1>
                <div class="tagline">{SITE.tagline}</div>
                <div class="page-actions">
                    <ShareWidget identifiers=identifiers />
                </div>
            </header>

            <p class="intro">
                "Send the link to your students, or embed the chatbot on your own site "
                "with the iframe or script snippet from the Share dialog."
            </p>
        </main>
    }
}
