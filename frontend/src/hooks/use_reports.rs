use shared::ReportSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notification::{Notification, NotificationKind};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct ReportsState {
    pub reports: Vec<ReportSummary>,
    pub loading: bool,
    pub query: String,
}

pub struct UseReportsResult {
    pub state: ReportsState,
    pub actions: ReportsActions,
}

#[derive(Clone)]
pub struct ReportsActions {
    pub refresh: Callback<()>,
    pub set_query: Callback<String>,
    pub delete_report: Callback<String>,
}

/// Diary history: load once, filter client-side, delete with a server
/// round trip. Outcomes are surfaced through the shared notification.
#[hook]
pub fn use_reports(api_client: &ApiClient, on_notify: Callback<Notification>) -> UseReportsResult {
    let reports = use_state(Vec::<ReportSummary>::new);
    let loading = use_state(|| true);
    let query = use_state(String::new);

    let refresh = {
        let api_client = api_client.clone();
        let reports = reports.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let reports = reports.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_reports().await {
                    Ok(data) => reports.set(data),
                    Err(error) => {
                        Logger::error_with_component(
                            "diary-history",
                            &format!("Failed to fetch reports: {}", error),
                        );
                    }
                }

                loading.set(false);
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let set_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let delete_report = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();

        Callback::from(move |report_id: String| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_notify = on_notify.clone();

            spawn_local(async move {
                match api_client.delete_report(&report_id).await {
                    Ok(response) => {
                        on_notify.emit(Notification {
                            kind: NotificationKind::Success,
                            message: response.success_message,
                        });
                        refresh.emit(());
                    }
                    Err(error) => {
                        Logger::error_with_component(
                            "diary-history",
                            &format!("Failed to delete report: {}", error),
                        );
                        on_notify.emit(Notification {
                            kind: NotificationKind::Error,
                            message: "Could not delete the report. Please try again.".to_string(),
                        });
                    }
                }
            });
        })
    };

    UseReportsResult {
        state: ReportsState {
            reports: (*reports).clone(),
            loading: *loading,
            query: (*query).clone(),
        },
        actions: ReportsActions {
            refresh,
            set_query,
            delete_report,
        },
    }
}
