use diary_core::service::DiaryFormService;
use diary_core::validation::{
    DelayFormInput, EquipmentFormInput, MaterialFormInput, OtherCostFormInput, OvertimeFormInput,
    SubcontractorFormInput,
};
use shared::{HiddenField, LaborLine};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::components::notification::{Notification, NotificationKind};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::{page_data, signature};

/// Everything the diary page needs from the form layer: a snapshot of
/// the domain service for rendering, the active notification, and the
/// callbacks its controls wire to.
pub struct UseDiaryFormResult {
    pub service: DiaryFormService,
    pub notification: Option<Notification>,
    pub actions: DiaryFormActions,
}

#[derive(Clone)]
pub struct DiaryFormActions {
    /// Each add returns whether the entry was accepted; accepted adds are
    /// the forms' cue to clear their fields.
    pub add_material: Callback<MaterialFormInput, bool>,
    pub add_equipment: Callback<EquipmentFormInput, bool>,
    pub add_other_cost: Callback<OtherCostFormInput, bool>,
    pub add_overtime: Callback<OvertimeFormInput, bool>,
    pub add_subcontractor: Callback<SubcontractorFormInput, bool>,
    pub add_delay: Callback<DelayFormInput, bool>,
    pub remove_entry: Callback<String>,
    pub set_labor_lines: Callback<Vec<LaborLine>>,
    pub select_project: Callback<String>,
    pub notify: Callback<Notification>,
    pub dismiss_notification: Callback<()>,
    pub on_submit: Callback<SubmitEvent>,
}

#[hook]
pub fn use_diary_form(api_client: &ApiClient) -> UseDiaryFormResult {
    let service = use_state(DiaryFormService::new);
    let notification = use_state(|| Option::<Notification>::None);
    let notification_duration = service.config().notification_duration_ms as u32;

    // Surface a notification and auto-dismiss it after the configured
    // duration
    let notify = {
        let notification = notification.clone();
        Callback::from(move |incoming: Notification| {
            notification.set(Some(incoming));

            let notification_clear = notification.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(notification_duration).await;
                notification_clear.set(None);
            });
        })
    };

    let dismiss_notification = {
        let notification = notification.clone();
        Callback::from(move |_| notification.set(None))
    };

    // Load the project list once: the template's embedded block when
    // present, the projects API otherwise
    {
        let service = service.clone();
        let api_client = api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let embedded = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| page_data::embedded_projects(&d));

                let projects = match embedded {
                    Some(projects) => projects,
                    None => match api_client.get_projects().await {
                        Ok(projects) => projects,
                        Err(error) => {
                            Logger::error_with_component(
                                "diary-form",
                                &format!("Failed to load projects: {}", error),
                            );
                            Vec::new()
                        }
                    },
                };

                if projects.is_empty() {
                    Logger::warn_with_component("diary-form", "No projects available for budget tracking");
                }

                let mut updated = (*service).clone();
                updated.set_projects(projects);
                service.set(updated);
            });
            || ()
        });
    }

    let add_material = {
        let service = service.clone();
        let notify = notify.clone();
        Callback::from(move |input: MaterialFormInput| -> bool {
            let mut updated = (*service).clone();
            let mut input = input;
            match updated.add_material(&mut input) {
                Ok(_) => {
                    service.set(updated);
                    true
                }
                Err(error) => {
                    if let Some(message) = updated.user_message(&error) {
                        notify.emit(Notification {
                            kind: NotificationKind::Error,
                            message,
                        });
                    }
                    false
                }
            }
        })
    };

    let add_equipment = {
        let service = service.clone();
        let notify = notify.clone();
        Callback::from(move |input: EquipmentFormInput| -> bool {
            let mut updated = (*service).clone();
            let mut input = input;
            match updated.add_equipment(&mut input) {
                Ok(_) => {
                    service.set(updated);
                    true
                }
                Err(error) => {
                    if let Some(message) = updated.user_message(&error) {
                        notify.emit(Notification {
                            kind: NotificationKind::Error,
                            message,
                        });
                    }
                    false
                }
            }
        })
    };

    let add_other_cost = {
        let service = service.clone();
        let notify = notify.clone();
        Callback::from(move |input: OtherCostFormInput| -> bool {
            let mut updated = (*service).clone();
            let mut input = input;
            match updated.add_other_cost(&mut input) {
                Ok(_) => {
                    service.set(updated);
                    true
                }
                Err(error) => {
                    if let Some(message) = updated.user_message(&error) {
                        notify.emit(Notification {
                            kind: NotificationKind::Error,
                            message,
                        });
                    }
                    false
                }
            }
        })
    };

    let add_overtime = {
        let service = service.clone();
        let notify = notify.clone();
        Callback::from(move |input: OvertimeFormInput| -> bool {
            let mut updated = (*service).clone();
            let mut input = input;
            match updated.add_overtime(&mut input) {
                Ok(_) => {
                    service.set(updated);
                    true
                }
                Err(error) => {
                    if let Some(message) = updated.user_message(&error) {
                        notify.emit(Notification {
                            kind: NotificationKind::Error,
                            message,
                        });
                    }
                    false
                }
            }
        })
    };

    let add_subcontractor = {
        let service = service.clone();
        let notify = notify.clone();
        Callback::from(move |input: SubcontractorFormInput| -> bool {
            let mut updated = (*service).clone();
            let mut input = input;
            match updated.add_subcontractor(&mut input) {
                Ok(_) => {
                    service.set(updated);
                    true
                }
                Err(error) => {
                    if let Some(message) = updated.user_message(&error) {
                        notify.emit(Notification {
                            kind: NotificationKind::Error,
                            message,
                        });
                    }
                    false
                }
            }
        })
    };

    let add_delay = {
        let service = service.clone();
        let notify = notify.clone();
        Callback::from(move |input: DelayFormInput| -> bool {
            let mut updated = (*service).clone();
            let mut input = input;
            match updated.add_delay(&mut input) {
                Ok(_) => {
                    service.set(updated);
                    true
                }
                Err(error) => {
                    if let Some(message) = updated.user_message(&error) {
                        notify.emit(Notification {
                            kind: NotificationKind::Error,
                            message,
                        });
                    }
                    false
                }
            }
        })
    };

    let remove_entry = {
        let service = service.clone();
        Callback::from(move |id: String| {
            let mut updated = (*service).clone();
            if updated.remove_entry(&id) {
                Logger::debug_with_component("diary-form", &format!("Removed entry {}", id));
                service.set(updated);
            }
        })
    };

    let set_labor_lines = {
        let service = service.clone();
        Callback::from(move |lines: Vec<LaborLine>| {
            let mut updated = (*service).clone();
            updated.set_labor_lines(lines);
            service.set(updated);
        })
    };

    let select_project = {
        let service = service.clone();
        Callback::from(move |id: String| {
            let mut updated = (*service).clone();
            updated.select_project(&id);
            service.set(updated);
        })
    };

    // Materialize the entry lists into hidden fields right before the
    // native POST; only a serialization failure stops the submit
    let on_submit = {
        let service = service.clone();
        Callback::from(move |event: SubmitEvent| {
            let Some(form) = event.target_dyn_into::<HtmlFormElement>() else {
                return;
            };
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let signature = signature::capture_signature(&document);
            match service.submit_fields(signature.as_deref()) {
                Ok(fields) => {
                    if let Err(error) = inject_hidden_fields(&document, &form, &fields) {
                        event.prevent_default();
                        gloo::console::error!("Failed to prepare submit fields:", error);
                    } else {
                        Logger::info_with_component("diary-form", "Submitting diary entry");
                    }
                }
                Err(error) => {
                    event.prevent_default();
                    gloo::console::error!("Failed to serialize entries:", error.to_string());
                }
            }
        })
    };

    UseDiaryFormResult {
        service: (*service).clone(),
        notification: (*notification).clone(),
        actions: DiaryFormActions {
            add_material,
            add_equipment,
            add_other_cost,
            add_overtime,
            add_subcontractor,
            add_delay,
            remove_entry,
            set_labor_lines,
            select_project,
            notify,
            dismiss_notification,
            on_submit,
        },
    }
}

/// Write the hidden inputs into the form, replacing any stale generated
/// field left behind by a prior submit attempt.
fn inject_hidden_fields(
    document: &Document,
    form: &HtmlFormElement,
    fields: &[HiddenField],
) -> Result<(), String> {
    for field in fields {
        let selector = format!("input[name=\"{}\"][data-generated=\"true\"]", field.name);
        if let Ok(Some(stale)) = form.query_selector(&selector) {
            stale.remove();
        }

        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(|_| format!("could not create hidden input {}", field.name))?
            .dyn_into()
            .map_err(|_| "created element was not an input".to_string())?;
        input.set_type("hidden");
        input.set_name(&field.name);
        input.set_value(&field.value);
        let _ = input.set_attribute("data-generated", "true");

        form.append_child(&input)
            .map_err(|_| format!("could not append hidden input {}", field.name))?;
    }
    Ok(())
}
