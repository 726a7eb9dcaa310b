use yew::prelude::*;

use crate::services::NotificationSink;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
}

/// Adapts the controllers' NotificationSink onto the app's toast stack.
pub struct ToastSink {
    notify: Callback<(ToastKind, String)>,
}

impl ToastSink {
    pub fn new(notify: Callback<(ToastKind, String)>) -> Self {
        Self { notify }
    }
}

impl NotificationSink for ToastSink {
    fn success(&self, message: &str) {
        log::info!("✅ {}", message);
        self.notify.emit((ToastKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        log::error!("❌ {}", message);
        self.notify.emit((ToastKind::Error, message.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<usize>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.toasts.iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                let on_click = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| on_dismiss.emit(id))
                };
                html! {
                    <div key={toast.id} {class} onclick={on_click}>
                        { &toast.message }
                    </div>
                }
            }) }
        </div>
    }
}
