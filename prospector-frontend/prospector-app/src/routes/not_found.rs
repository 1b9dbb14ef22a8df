use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Page Not Found - Prospector" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center gap-6 p-4">
            <h1 class="text-4xl font-extrabold">"Nothing here"</h1>
            <p class="text-lg text-[color:var(--color-text-muted)]">
                "The page you are looking for does not exist."
            </p>
            <A href="/" attr:class="btn btn-primary px-8 py-3">
                "Back to the search"
            </A>
        </div>
    }
}
