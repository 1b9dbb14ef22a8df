use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;

use crate::{DataTable, SortDirection, TableRow};

const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Renders a [`DataTable`] with sortable headers, a filter box and a pager.
///
/// The table takes ownership of `table` on mount. Callers change its rows and then call
/// [`DataTable::draw`], the view follows along.
#[component]
pub fn DataTableView<R, F, V>(
    table: RwSignal<DataTable<R>>,
    id: &'static str,
    body_id: &'static str,
    render_row: F,
) -> impl IntoView
where
    R: TableRow,
    F: Fn(R) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    table.update(|table| table.initialize());

    let headers = R::columns()
        .iter()
        .enumerate()
        .map(|(column, title)| {
            let indicator = move || match table.with(|t| t.sort_state()) {
                Some((sorted, SortDirection::Ascending)) if sorted == column => {
                    view! { <Icon icon=i::BsChevronUp /> }.into_any()
                }
                Some((sorted, SortDirection::Descending)) if sorted == column => {
                    view! { <Icon icon=i::BsChevronDown /> }.into_any()
                }
                _ => view! { <Icon icon=i::BsChevronExpand /> }.into_any(),
            };
            view! {
                <th
                    class="cursor-pointer select-none"
                    on:click=move |_| table.update(|t| t.toggle_sort(column))
                >
                    <div class="flex flex-row items-center gap-1">{*title} {indicator}</div>
                </th>
            }
        })
        .collect_view();

    let page_sizes = PAGE_SIZES
        .iter()
        .map(|size| {
            let size = *size;
            view! {
                <option
                    value=size.to_string()
                    prop:selected=move || table.with(|t| t.page_size()) == size
                >
                    {size}
                </option>
            }
        })
        .collect_view();

    let rows = move || {
        table
            .with(|t| t.visible_rows())
            .into_iter()
            .map(|row| render_row(row))
            .collect_view()
    };

    view! {
        <div class="flex flex-col gap-2">
            <div class="flex flex-row justify-between items-center gap-2">
                <label class="flex flex-row items-center gap-2">
                    "Show"
                    <select
                        class="input"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                table.update(|t| t.set_page_size(size));
                            }
                        }
                    >
                        {page_sizes}
                    </select>
                    "entries"
                </label>
                <label class="flex flex-row items-center gap-2">
                    "Search:"
                    <input
                        class="input"
                        type="search"
                        prop:value=move || table.with(|t| t.filter().to_string())
                        on:input=move |ev| table.update(|t| t.set_filter(event_target_value(&ev)))
                    />
                </label>
            </div>
            <table id=id class="w-full">
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody id=body_id>{rows}</tbody>
            </table>
            <div class="flex flex-row justify-between items-center gap-2">
                <span class="text-[color:var(--color-text-muted)]">
                    {move || table.with(|t| t.page_info().to_string())}
                </span>
                <div class="flex flex-row items-center gap-2">
                    <button
                        class="btn"
                        disabled=move || table.with(|t| !t.has_previous_page())
                        on:click=move |_| table.update(|t| t.previous_page())
                    >
                        "Previous"
                    </button>
                    <span>
                        {move || {
                            let info = table.with(|t| t.page_info());
                            format!("{} / {}", info.page + 1, info.page_count)
                        }}
                    </span>
                    <button
                        class="btn"
                        disabled=move || table.with(|t| !t.has_next_page())
                        on:click=move |_| table.update(|t| t.next_page())
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}
