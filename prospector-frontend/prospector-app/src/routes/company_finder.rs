use data_table::{DataTable, DataTableView};
use icondata as i;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_icons::*;

use crate::api::get_companies;
use crate::components::{company_row::*, loading::*};
use crate::finder::FinderState;

/// Prompt form plus the results table it fills in.
#[component]
pub fn CompanyFinder() -> impl IntoView {
    let (input_prompt, set_input_prompt) = signal(String::new());
    let finder = RwSignal::new(FinderState::default());
    let table = RwSignal::new(DataTable::<CompanyRow>::default());
    // the server rendered form has no submit handler, so it stays disabled until hydrated
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move |_| set_hydrated.set(true));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input_prompt = input_prompt.get_untracked();
        let Some(ticket) = finder.try_update(|finder| finder.submit()) else {
            return;
        };
        spawn_local(async move {
            let result = get_companies(&input_prompt).await;
            let mut resolution = None;
            table.update(|table| {
                finder.update(|finder| resolution = Some(finder.resolve(ticket, result, table)))
            });
            log::debug!("submission {ticket:?} resolved as {resolution:?}");
        });
    };

    view! {
        <div class="container mx-auto max-w-7xl flex flex-col gap-6">
            <h1 class="text-3xl font-bold">"Find companies"</h1>
            <form id="input-form" class="flex flex-row gap-2" on:submit=on_submit>
                <input
                    id="input_prompt"
                    name="input_prompt"
                    type="text"
                    class="input w-full"
                    placeholder="e.g. B2B payment gateway companies in the USA"
                    prop:value=input_prompt
                    on:input=move |ev| set_input_prompt.set(event_target_value(&ev))
                />
                <button
                    class="btn btn-primary flex flex-row items-center gap-2"
                    type="submit"
                    disabled=move || !hydrated.get()
                >
                    <Icon icon=i::AiSearchOutlined />
                    "Search"
                </button>
            </form>
            <Show when=move || finder.with(|f| f.is_loading())>
                <Loading />
            </Show>
            {move || {
                finder
                    .with(|f| f.last_error().map(|e| e.to_string()))
                    .map(|message| {
                        view! {
                            <p class="text-red-400" role="alert">
                                {message}
                            </p>
                        }
                    })
            }}
            <div id="output" class:hidden=move || !finder.with(|f| f.results_visible())>
                <DataTableView
                    table
                    id="company-table"
                    body_id="output-body"
                    render_row=|row: CompanyRow| view! { <CompanyRowView row /> }
                />
            </div>
        </div>
    }
}
