use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A transient banner message shared by the diary page's controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let class = match notification.kind {
        NotificationKind::Error => "notification error",
        NotificationKind::Success => "notification success",
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={class} role="alert">
            <span class="notification-message">{&notification.message}</span>
            <button type="button" class="notification-dismiss" onclick={on_dismiss}>
                {"\u{00d7}"}
            </button>
        </div>
    }
}
