//! Transient notifications stacked in the corner of the screen.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;
use crate::Icon;
use crate::icons::{FaCircleCheck, FaCircleInfo, FaTriangleExclamation, FaXmark};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToastOptions {
    duration: Option<Duration>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Handle returned by [`use_toast`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Error, message, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Info, message, options);
    }

    fn push(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        items.write().push(Toast { id, kind, message });

        let duration = options.duration.unwrap_or(DEFAULT_TOAST_DURATION);
        spawn(async move {
            sleep(duration).await;
            items.write().retain(|t| t.id != id);
        });
    }

    fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        div {
            class: "toast-stack",
            for toast in items() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    role: "status",
                    {match toast.kind {
                        ToastKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                        ToastKind::Error => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
                        ToastKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                    }}
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| toasts.dismiss(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
