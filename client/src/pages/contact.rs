//! Contact page: the form, theme toggle, status line and animation box.
//!
//! ARCHITECTURE
//! ============
//! Every handler forwards to `ContactApp`. The only thing owned here is the
//! auto-hide timer for the success banner, since a browser timeout handle
//! cannot live in the shared `Send + Sync` signal.

use leptos::prelude::*;

use crate::components::{
    animated_box::AnimatedBox, form_field::FormField, preference_display::PreferenceDisplay,
    success_banner::SuccessBanner, theme_switcher::ThemeSwitcher,
};
use crate::state::contact::{BrowserContactApp, submit_with};
use crate::state::form::Field;
use crate::util::dom::BrowserDocument;
use crate::util::timer::PendingTask;

#[component]
pub fn ContactPage() -> impl IntoView {
    let contact = expect_context::<RwSignal<BrowserContactApp>>();
    let hide_timer = StoredValue::new_local(PendingTask::new());

    let message = move || contact.with(|c| c.form.message.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        hide_timer.update_value(|timer| {
            if submit_with(&contact, &BrowserDocument, timer).is_none() {
                log::warn!("contact state disposed before submit");
            }
        });
    };

    view! {
        <main class="container">
            <header class="page-header">
                <h1>"Contact Us"</h1>
                <ThemeSwitcher/>
            </header>

            <PreferenceDisplay/>

            <form id="contactForm" novalidate=true on:submit=on_submit>
                <FormField field=Field::Name/>
                <FormField field=Field::Email/>
                <FormField field=Field::Password/>
                <FormField field=Field::ConfirmPassword/>

                <div class="form-group">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        prop:value=message
                        on:input=move |ev| contact.update(|c| c.set_message(event_target_value(&ev)))
                    ></textarea>
                </div>

                <button type="submit" id="submitButton">"Send Message"</button>
            </form>

            <SuccessBanner/>

            <AnimatedBox/>
        </main>
    }
}
