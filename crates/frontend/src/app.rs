use crate::pages::dashboard::DashboardPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Одностраничное приложение: дашборд монтируется напрямую, без роутера
    view! {
        <DashboardPage />
    }
}
