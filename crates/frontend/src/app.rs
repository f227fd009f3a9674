use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    // Toasts are dispatched from page view models, so the provider wraps the router.
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AppRoutes />
            </ToasterProvider>
        </ConfigProvider>
    }
}
