//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::contact::BrowserContactApp;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let contact = expect_context::<RwSignal<BrowserContactApp>>();
    let theme = move || contact.with(|c| c.theme);

    view! {
        <button
            type="button"
            id="themeSwitcher"
            class="theme-switcher"
            aria-label=move || theme().toggle_label()
            title=move || theme().toggle_label()
            on:click=move |_| contact.update(BrowserContactApp::toggle_theme)
        >
            {move || theme().toggle_icon()}
        </button>
    }
}
