use finance_hub_core::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notification: Option<Notification>,
}

/// Toast in the corner; the app clears it after a few seconds
#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let class = if notification.is_error() {
        "notification error"
    } else {
        "notification success"
    };

    html! {
        <div class={class} role="status">
            {&notification.message}
        </div>
    }
}
