mod components;
mod hooks;
mod services;

use shared::CategoryKind;
use yew::prelude::*;

use components::budget_panel::BudgetPanel;
use components::entry_list::EntryList;
use components::forms::delay_form::DelayForm;
use components::forms::equipment_form::EquipmentForm;
use components::forms::material_form::MaterialForm;
use components::forms::other_cost_form::OtherCostForm;
use components::forms::overtime_form::OvertimeForm;
use components::forms::subcontractor_form::SubcontractorForm;
use components::history_list::HistoryList;
use components::labor_lines::LaborLinesEditor;
use components::notification::NotificationBanner;
use components::project_selector::ProjectSelector;
use hooks::use_diary_form::use_diary_form;
use hooks::use_reports::use_reports;
use services::api::ApiClient;
use services::{csrf, date_utils};

// Known subcontractors for the picklist; anything else goes through the
// custom option
const SUBCONTRACTOR_NAMES: [&str; 4] = [
    "JRC Builders",
    "Metro Electrical Services",
    "Southpoint Plumbing",
    "Vista Glass & Aluminum",
];

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let diary = use_diary_form(&api_client);
    let reports = use_reports(&api_client, diary.actions.notify.clone());

    let summary = diary.service.budget_summary();
    let daily_total = diary.service.format_currency(summary.daily_total);
    let running_cost = summary.running_cost.map(|v| diary.service.format_currency(v));
    let remaining = summary.remaining.map(|v| diary.service.format_currency(v));

    let subcontractor_names: Vec<String> =
        SUBCONTRACTOR_NAMES.iter().map(|s| s.to_string()).collect();
    let custom_sentinel = diary.service.config().custom_name_sentinel.clone();

    html! {
        <div class="diary-page">
            <NotificationBanner
                notification={diary.notification.clone()}
                on_dismiss={diary.actions.dismiss_notification.clone()}
            />

            <header class="page-header">
                <h1>{"Construction Site Diary"}</h1>
            </header>

            <form
                class="diary-form"
                method="post"
                action="/diary/entry/"
                onsubmit={diary.actions.on_submit.clone()}
            >
                <input
                    type="hidden"
                    name="csrfmiddlewaretoken"
                    value={csrf::csrf_token().unwrap_or_default()}
                />

                <ProjectSelector
                    projects={diary.service.projects().to_vec()}
                    on_select={diary.actions.select_project.clone()}
                />

                <div class="form-group">
                    <label for="report-date">{"Report date"}</label>
                    <input
                        type="date"
                        id="report-date"
                        name="report_date"
                        value={date_utils::get_current_date()}
                    />
                </div>

                <LaborLinesEditor on_change={diary.actions.set_labor_lines.clone()} />

                <MaterialForm on_add={diary.actions.add_material.clone()} />
                <EntryList
                    rows={diary.service.rows(CategoryKind::Materials)}
                    on_remove={diary.actions.remove_entry.clone()}
                />

                <EquipmentForm on_add={diary.actions.add_equipment.clone()} />
                <EntryList
                    rows={diary.service.rows(CategoryKind::Equipment)}
                    on_remove={diary.actions.remove_entry.clone()}
                />

                <OvertimeForm on_add={diary.actions.add_overtime.clone()} />
                <EntryList
                    rows={diary.service.rows(CategoryKind::Overtime)}
                    on_remove={diary.actions.remove_entry.clone()}
                />

                <SubcontractorForm
                    names={subcontractor_names}
                    custom_sentinel={custom_sentinel}
                    on_add={diary.actions.add_subcontractor.clone()}
                />
                <EntryList
                    rows={diary.service.rows(CategoryKind::Subcontractors)}
                    on_remove={diary.actions.remove_entry.clone()}
                />

                <OtherCostForm on_add={diary.actions.add_other_cost.clone()} />
                <EntryList
                    rows={diary.service.rows(CategoryKind::OtherCosts)}
                    on_remove={diary.actions.remove_entry.clone()}
                />

                <DelayForm on_add={diary.actions.add_delay.clone()} />
                <EntryList
                    rows={diary.service.rows(CategoryKind::Delays)}
                    on_remove={diary.actions.remove_entry.clone()}
                />

                <BudgetPanel
                    daily_total={daily_total}
                    running_cost={running_cost}
                    remaining={remaining}
                />

                <div class="signature-section">
                    <label for="signature-pad">{"Site engineer signature"}</label>
                    <canvas id="signature-pad" width="400" height="150" data-empty="true"></canvas>
                </div>

                <button type="submit" class="btn btn-primary">{"Submit Diary Entry"}</button>
            </form>

            <HistoryList
                reports={reports.state.reports.clone()}
                loading={reports.state.loading}
                query={reports.state.query.clone()}
                on_query_change={reports.actions.set_query.clone()}
                on_refresh={reports.actions.refresh.clone()}
                on_delete={reports.actions.delete_report.clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
