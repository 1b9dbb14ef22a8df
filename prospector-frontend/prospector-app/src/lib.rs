pub mod api;
pub mod components;
pub mod error;
pub mod finder;
pub mod routes;

use crate::routes::{company_finder::*, not_found::*};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Document the server renders around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/prospector.css" />
        <Title text="Prospector" />
        <Router>
            <main class="main-content p-6">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("") view=CompanyFinder />
                </Routes>
            </main>
        </Router>
    }
}
