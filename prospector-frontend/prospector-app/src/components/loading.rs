use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="lds-ellipsis" role="status" aria-label="Loading">
            <div></div>
            <div></div>
            <div></div>
            <div></div>
        </div>
    }
}
