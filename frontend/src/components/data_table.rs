//! Generic table component over the shared `TableEngine`.
//!
//! Sort, filter, search and page state live in this component only; the rows
//! come from the page that owns them.

use std::rc::Rc;

use shared::{ColumnSpec, SortDirection, TableEngine};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: PartialEq + 'static> {
    pub rows: Rc<Vec<R>>,
    pub columns: Vec<ColumnSpec<R>>,
    /// Column receiving the free-text search box, if any
    #[prop_or_default]
    pub search_key: Option<&'static str>,
    /// Extra per-row cell rendered after the data columns
    #[prop_or_default]
    pub actions: Option<Callback<R, Html>>,
    #[prop_or_default]
    pub loading: bool,
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    }
}

/// Footer summary in the form "Showing X of Y items | Page i of n"
pub fn footer_text(shown: usize, total: usize, page_index: usize, page_count: usize) -> String {
    format!(
        "Showing {} of {} items | Page {} of {}",
        shown,
        total,
        page_index + 1,
        page_count
    )
}

#[function_component(DataTable)]
pub fn data_table<R>(props: &DataTableProps<R>) -> Html
where
    R: Clone + PartialEq + 'static,
{
    let engine = {
        let columns = props.columns.clone();
        let search_key = props.search_key;
        use_state(move || TableEngine::new(columns, search_key))
    };

    let update = {
        let engine = engine.clone();
        move |apply: Box<dyn Fn(&mut TableEngine<R>)>| {
            let mut next = (*engine).clone();
            apply(&mut next);
            engine.set(next);
        }
    };

    let on_search = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            update(Box::new(move |engine| engine.set_search(text.clone())));
        })
    };

    let on_previous = {
        let update = update.clone();
        let rows = props.rows.clone();
        Callback::from(move |_: MouseEvent| {
            let rows = rows.clone();
            update(Box::new(move |engine| engine.previous_page(&rows)));
        })
    };

    let on_next = {
        let update = update.clone();
        let rows = props.rows.clone();
        Callback::from(move |_: MouseEvent| {
            let rows = rows.clone();
            update(Box::new(move |engine| engine.next_page(&rows)));
        })
    };

    let view = engine.view(&props.rows);
    let column_count = engine.columns().len() + usize::from(props.actions.is_some());

    let on_clear = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(Box::new(|engine| engine.clear_filters())))
    };

    let has_filters = engine.columns().iter().any(|c| c.filter.is_some());
    let filters_active = !engine.state().search.is_empty() || !engine.state().column_filters.is_empty();
    let toolbar = if engine.search_key().is_some() || has_filters {
        html! {
            <div class="table-toolbar">
                {if engine.search_key().is_some() {
                    html! {
                        <input
                            type="text"
                            class="table-search"
                            placeholder="Search..."
                            value={engine.state().search.clone()}
                            oninput={on_search}
                        />
                    }
                } else { html! {} }}
                <button class="btn btn-secondary" onclick={on_clear} disabled={!filters_active}>{"Clear filters"}</button>
            </div>
        }
    } else {
        html! {}
    };

    let headers = engine.columns().iter().map(|column| {
        let key = column.key;
        let filter_menu = if column.filter.is_some() {
            let selected = engine.column_filter(key).map(|v| v.to_vec()).unwrap_or_default();
            let options = engine.distinct_values(&props.rows, key);
            html! {
                <details class="column-filter">
                    <summary>{if selected.is_empty() { "Filter".to_string() } else { format!("Filter ({})", selected.len()) }}</summary>
                    {for options.into_iter().map(|value| {
                        let checked = selected.contains(&value);
                        let label = column.render_value(&value);
                        let on_toggle = {
                            let update = update.clone();
                            Callback::from(move |_: Event| {
                                let value = value.clone();
                                update(Box::new(move |engine| engine.toggle_filter_value(key, value.clone())));
                            })
                        };
                        html! {
                            <label class="filter-option">
                                <input type="checkbox" checked={checked} onchange={on_toggle} />
                                {label}
                            </label>
                        }
                    })}
                </details>
            }
        } else {
            html! {}
        };

        let title = if column.sortable {
            let on_sort = {
                let update = update.clone();
                Callback::from(move |_: MouseEvent| update(Box::new(move |engine| engine.toggle_sort(key))))
            };
            html! {
                <button class="sort-button" onclick={on_sort}>
                    {column.header}{sort_indicator(engine.sort_direction(key))}
                </button>
            }
        } else {
            html! { <span>{column.header}</span> }
        };

        html! { <th key={key}>{title}{filter_menu}</th> }
    });

    let body = if props.loading {
        html! {
            <tr><td class="table-placeholder" colspan={column_count.to_string()}>{"Loading..."}</td></tr>
        }
    } else if view.rows.is_empty() {
        html! {
            <tr><td class="table-placeholder" colspan={column_count.to_string()}>{"No results."}</td></tr>
        }
    } else {
        view.rows
            .iter()
            .map(|row| {
                html! {
                    <tr>
                        {for engine.columns().iter().map(|column| html! { <td>{column.render(row)}</td> })}
                        {match &props.actions {
                            Some(actions) => html! { <td class="row-actions">{actions.emit((*row).clone())}</td> },
                            None => html! {},
                        }}
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="data-table">
            {toolbar}
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            {for headers}
                            {if props.actions.is_some() { html! { <th>{"Actions"}</th> } } else { html! {} }}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            <div class="table-footer">
                <span>{footer_text(view.rows.len(), view.total_rows, view.page_index, view.page_count)}</span>
                <div class="pagination">
                    <button class="btn" onclick={on_previous} disabled={!view.can_previous}>{"Previous"}</button>
                    <button class="btn" onclick={on_next} disabled={!view.can_next}>{"Next"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_footer_text() {
        assert_eq!(footer_text(10, 25, 0, 3), "Showing 10 of 25 items | Page 1 of 3");
        assert_eq!(footer_text(5, 25, 2, 3), "Showing 5 of 25 items | Page 3 of 3");
    }

    #[wasm_bindgen_test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some(SortDirection::Ascending)), " ▲");
        assert_eq!(sort_indicator(None), "");
    }
}
