//! Status line showing the stored theme and a welcome-back greeting.

use leptos::prelude::*;

use crate::state::contact::BrowserContactApp;

#[component]
pub fn PreferenceDisplay() -> impl IntoView {
    let contact = expect_context::<RwSignal<BrowserContactApp>>();
    let text = move || contact.with(|c| c.preference_text.clone());

    view! {
        <p id="preferenceDisplay" class="preference-display">{text}</p>
    }
}
