//! Transient notifications (toasts) for success and failure feedback.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toasts beyond this count push the oldest ones out.
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert--success",
            ToastKind::Error => "alert alert--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded toast queue, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        log::debug!("toast {:?}: {}", kind, message);
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));
        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(this.timeout_ms).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the toast stack in the bottom-right corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toaster">
            <For
                each=move || service.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| service.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_assigns_ids_and_dismisses() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "one".into());
        let second = queue.push(ToastKind::Error, "two".into());
        assert_ne!(first, second);

        queue.dismiss(first);
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two"]);

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_VISIBLE + 2) {
            queue.push(ToastKind::Success, i.to_string());
        }
        assert_eq!(queue.toasts().len(), MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].message, "2");
    }
}
