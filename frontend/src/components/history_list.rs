use diary_core::filter::filter_reports;
use shared::ReportSummary;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::confirm_modal::ConfirmModal;

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub reports: Vec<ReportSummary>,
    pub loading: bool,
    pub query: String,
    pub on_query_change: Callback<String>,
    pub on_refresh: Callback<()>,
    pub on_delete: Callback<String>,
}

/// Previously submitted diary reports with a client-side search box.
/// Deletes go through the confirm dialog first.
#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    let pending_delete = use_state(|| Option::<String>::None);

    let on_search_input = {
        let on_query_change = props.on_query_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_query_change.emit(input.value());
        })
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| {
            if let Some(report_id) = (*pending_delete).clone() {
                on_delete.emit(report_id);
            }
            pending_delete.set(None);
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let on_refresh_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let filtered = filter_reports(&props.reports, &props.query);

    html! {
        <section class="diary-history">
            <div class="history-header">
                <h2>{"Diary History"}</h2>
                <button type="button" class="btn btn-secondary" onclick={on_refresh_click}>
                    {"Refresh"}
                </button>
            </div>

            <input
                type="search"
                class="history-search"
                placeholder="Search by project, date, or status..."
                value={props.query.clone()}
                oninput={on_search_input}
            />

            {if props.loading {
                html! { <div class="loading">{"Loading reports..."}</div> }
            } else if filtered.is_empty() {
                html! { <div class="empty">{"No reports match."}</div> }
            } else {
                html! {
                    <table class="history-table">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Project"}</th>
                                <th>{"Status"}</th>
                                <th>{"Total Cost"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for filtered.iter().map(|report| {
                                let request_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let report_id = report.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(report_id.clone()));
                                    })
                                };

                                html! {
                                    <tr key={report.id.clone()}>
                                        <td>{report.formatted_date()}</td>
                                        <td>{&report.project_name}</td>
                                        <td class={format!("status {}", report.status)}>{&report.status}</td>
                                        <td class="cost">{format!("{:.2}", report.total_cost)}</td>
                                        <td>
                                            <button type="button" class="btn-remove" onclick={request_delete}>
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            <ConfirmModal
                is_open={pending_delete.is_some()}
                title="Delete report"
                message="This permanently removes the diary report. Continue?"
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </section>
    }
}
