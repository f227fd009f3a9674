use crate::domain::a001_advantage::ui::details::EditAdvantagePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Login page of the surrounding dashboard
pub const LOGIN_PATH: &str = "/login";
/// Perk list of the surrounding dashboard
pub const ADVANTAGE_LIST_PATH: &str = "/company/advantages";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Página não encontrada"</h1>
            <a href=ADVANTAGE_LIST_PATH>"Voltar para as vantagens"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                // Expects `?id=<advantage id>`
                <Route path=path!("/company/advantages/edit") view=EditAdvantagePage />
            </Routes>
        </Router>
    }
}
