//! Transient user notifications (toasts)

use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn title(self) -> &'static str {
        match self {
            NoticeLevel::Success => "Sucesso",
            NoticeLevel::Error => "Erro",
        }
    }
}

/// Shows a short message to the user
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Notifier backed by the thaw toaster
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    /// Must be called under `ToasterProvider`
    pub fn from_context() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let title = level.title();
        let message = message.to_string();
        let intent = match level {
            NoticeLevel::Success => ToastIntent::Success,
            NoticeLevel::Error => ToastIntent::Error,
        };

        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        <ToastBody>{message}</ToastBody>
                    </Toast>
                }
            },
            ToastOptions::default().with_intent(intent),
        );
    }
}
