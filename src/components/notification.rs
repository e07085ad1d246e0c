use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationPopupProps {
    pub notification: Option<Notification>,
    /// Emitted once the slide-out finishes; the owner clears its state.
    pub on_dismiss: Callback<()>,
}

/// Transient corner popup. Slides in, holds for 4 seconds, slides out over
/// 300ms, then asks the owner to drop it. Both timeouts are owned by the
/// effect and cancelled if a new notification replaces this one early.
#[function_component(NotificationPopup)]
pub fn notification_popup(props: &NotificationPopupProps) -> Html {
    let exiting = use_state(|| false);

    {
        let exiting = exiting.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notification| {
                let mut timers = Vec::new();
                if notification.is_some() {
                    exiting.set(false);
                    let exit_setter = exiting.clone();
                    timers.push(Timeout::new(config::NOTIFICATION_VISIBLE_MS, move || {
                        exit_setter.set(true);
                    }));
                    timers.push(Timeout::new(
                        config::NOTIFICATION_VISIBLE_MS + config::NOTIFICATION_EXIT_MS,
                        move || {
                            on_dismiss.emit(());
                        },
                    ));
                }
                move || {
                    // Dropping the handles cancels any timer still pending.
                    drop(timers);
                }
            },
            props.notification.clone(),
        );
    }

    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let kind_class = match notification.kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };

    html! {
        <div class={classes!("notification", kind_class, (*exiting).then(|| "exiting"))}>
            <style>
                {r#"
                    @keyframes notificationSlideIn {
                        from { transform: translateX(400px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes notificationSlideOut {
                        to { transform: translateX(400px); opacity: 0; }
                    }
                    .notification {
                        position: fixed;
                        top: 90px;
                        right: 24px;
                        z-index: 1000;
                        max-width: 360px;
                        padding: 1rem 1.5rem;
                        border-radius: 12px;
                        color: #fff;
                        font-size: 0.95rem;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                        animation: notificationSlideIn 0.3s ease;
                    }
                    .notification.success {
                        background: rgba(34, 139, 84, 0.95);
                        border: 1px solid rgba(126, 255, 178, 0.2);
                    }
                    .notification.error {
                        background: rgba(178, 48, 48, 0.95);
                        border: 1px solid rgba(255, 126, 126, 0.2);
                    }
                    .notification.exiting {
                        animation: notificationSlideOut 0.3s ease forwards;
                    }
                "#}
            </style>
            { notification.message.clone() }
        </div>
    }
}
