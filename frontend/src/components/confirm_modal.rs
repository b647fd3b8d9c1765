use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Generic confirm dialog for destructive actions.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal confirm-modal">
                <h3>{props.title.clone()}</h3>
                <p>{props.message.clone()}</p>
                <div class="modal-actions">
                    <button type="button" class="btn btn-danger" onclick={on_confirm}>
                        {"Confirm"}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
