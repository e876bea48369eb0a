use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;

use components::{layout::Layout, notification::NotificationToast};
use pages::{EmployeesPage, RosterPage};
use state::{directory::provide_directory_store, notification::provide_notifier};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting attendance console");

    // Mount only after the runtime config is resolved so every request
    // sees the final base URL.
    leptos::spawn_local(async move {
        let config = config::init().await;
        log::info!("runtime config loaded, api base {}", config.api_base_url);
        mount_to_body(App);
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_directory_store();
    let notifier = provide_notifier();

    view! {
        <Title text="Attendance Console"/>
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=EmployeesPage/>
                    <Route path="/roster" view=RosterPage/>
                </Routes>
            </Layout>
            <NotificationToast notifier=notifier/>
        </Router>
    }
}
