//! Clickable box that replays its pulse animation.

use leptos::prelude::*;

use crate::state::contact::BrowserContactApp;
use crate::util::animation::ANIMATED_BOX_ID;

/// The pulse marker is toggled imperatively through the document surface,
/// so the view never binds the class itself.
#[component]
pub fn AnimatedBox() -> impl IntoView {
    let contact = expect_context::<RwSignal<BrowserContactApp>>();

    view! {
        <div
            id=ANIMATED_BOX_ID
            class="animated-box"
            role="button"
            tabindex="0"
            on:click=move |_| contact.with_untracked(BrowserContactApp::trigger_animation)
        >
            "Click me!"
        </div>
    }
}
