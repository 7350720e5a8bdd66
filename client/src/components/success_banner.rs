//! Confirmation shown after an accepted submission.

use leptos::prelude::*;

use crate::state::contact::BrowserContactApp;

/// Renders the submitter's name as text, never as markup.
#[component]
pub fn SuccessBanner() -> impl IntoView {
    let contact = expect_context::<RwSignal<BrowserContactApp>>();
    let name = move || contact.with(|c| c.submission.success().map(|m| m.name.clone()));

    view! {
        <Show when=move || name().is_some()>
            <div id="successMessage" class="success-message" role="status">
                "Thank you, "
                <strong>{move || name().unwrap_or_default()}</strong>
                "! Your message has been sent."
            </div>
        </Show>
    }
}
