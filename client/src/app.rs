//! Root application component with routing and the shared contact state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::contact::ContactPage;
use crate::state::contact::BrowserContactApp;
use crate::util::dom::BrowserDocument;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the `ContactApp` signal and restores saved preferences once the
/// page is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let contact = RwSignal::new(BrowserContactApp::new(BrowserStorage, BrowserDocument));
    provide_context(contact);

    // Effects only run client-side, after hydration.
    Effect::new(move || {
        contact.update(BrowserContactApp::initialize);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/contact-form.css"/>
        <Title text="Contact Us"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ContactPage/>
            </Routes>
        </Router>
    }
}
