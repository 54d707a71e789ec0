//! Transient user-facing notifications
//!
//! Publishers only see a `Callback<Notification>`; the center owns the list
//! of live messages and their auto-dismiss timers.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
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

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct LiveNotification {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    pub items: RwSignal<Vec<LiveNotification>>,
    next_id: StoredValue<u64>,
    /// 0 keeps notifications until dismissed by hand
    timeout_ms: u32,
}

impl NotificationCenter {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            timeout_ms,
        }
    }

    /// Show a notification; returns its id
    pub fn publish(&self, notification: Notification) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(LiveNotification { id, notification });
        });

        if self.timeout_ms > 0 {
            let this = *self;
            Timeout::new(self.timeout_ms, move || this.dismiss(id)).forget();
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        // The center may be gone by the time a timer fires
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    /// Publish capability handed to components
    pub fn callback(&self) -> Callback<Notification> {
        let this = *self;
        Callback::new(move |notification: Notification| {
            this.publish(notification);
        })
    }
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().expect("NotificationCenter not provided")
}

/// Renders live notifications in the corner of the page
#[component]
pub fn NotificationStack() -> impl IntoView {
    let center = use_notifications();
    let items = center.items;

    view! {
        <div class="notification-stack">
            <For
                each=move || items.get()
                key=|n| n.id
                children=move |live| {
                    let intent = match live.notification.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    let id = live.id;
                    view! {
                        <div class="notification-stack__item">
                            <MessageBar intent=intent>
                                <span class="notification-stack__text">{live.notification.message}</span>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| center.dismiss(id)
                                >
                                    "×"
                                </Button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
