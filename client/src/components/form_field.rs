//! Labelled input with its validation marker and error text.

use leptos::prelude::*;

use crate::state::contact::BrowserContactApp;
use crate::state::form::Field;

/// One validated input. Keystrokes update the stored value; leaving the
/// input hands the blur rules to `ContactApp::blur`.
#[component]
pub fn FormField(field: Field) -> impl IntoView {
    let contact = expect_context::<RwSignal<BrowserContactApp>>();

    let value = move || contact.with(|c| c.form.value(field).to_owned());
    let state = move || contact.with(|c| c.form.state(field));

    view! {
        <div class="form-group">
            <label for=field.element_id()>{field.label()}</label>
            <input
                type=field.input_type()
                id=field.element_id()
                name=field.element_id()
                prop:value=value
                class:valid=move || state().is_valid()
                class:invalid=move || state().is_invalid()
                on:input=move |ev| contact.update(|c| c.set_value(field, event_target_value(&ev)))
                on:blur=move |_| contact.update(|c| c.blur(field))
            />
            <span class="error-message" id=field.error_id() aria-live="polite">
                {move || state().message()}
            </span>
        </div>
    }
}
