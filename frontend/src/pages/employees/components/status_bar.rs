use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::ErrorMessage,
    },
    pages::employees::utils::ActionAvailability,
    state::directory::ConnectivityStatus,
};
use leptos::*;

fn connectivity_chip(status: ConnectivityStatus) -> (&'static str, &'static str) {
    match status {
        ConnectivityStatus::Connected => (
            "Backend Live",
            "bg-status-success-bg text-status-success-text border-status-success-border",
        ),
        ConnectivityStatus::Disconnected => (
            "Backend Offline",
            "bg-status-error-bg text-status-error-text border-status-error-border",
        ),
        ConnectivityStatus::Checking => ("Connecting", "bg-surface-muted text-fg-muted border-border"),
    }
}

#[component]
pub fn StatusBar(
    #[prop(into)] connectivity: Signal<ConnectivityStatus>,
    #[prop(into)] employee_count: Signal<usize>,
    #[prop(into)] last_error: Signal<Option<String>>,
    #[prop(into)] availability: Signal<ActionAvailability>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] create_open: Signal<bool>,
    #[prop(into)] biometric_pending: Signal<bool>,
    on_refresh: Callback<()>,
    on_toggle_create: Callback<()>,
    on_biometric_test: Callback<()>,
) -> impl IntoView {
    let disconnected = move || connectivity.get() == ConnectivityStatus::Disconnected;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-4">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <div class="flex items-center gap-3">
                    <span class=move || {
                        format!(
                            "inline-flex items-center rounded-full border px-3 py-1 text-xs font-semibold {}",
                            connectivity_chip(connectivity.get()).1
                        )
                    }>
                        {move || connectivity_chip(connectivity.get()).0}
                    </span>
                    <span class="text-sm text-fg-muted">
                        {move || format!("{} employees", employee_count.get())}
                    </span>
                </div>
                <div class="flex flex-wrap gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || !availability.get().refresh)
                        loading=loading
                        on_click=on_refresh
                    >
                        <i class="fas fa-sync-alt"></i>
                        "Refresh"
                    </Button>
                    <Button
                        disabled=Signal::derive(move || !availability.get().add)
                        on_click=on_toggle_create
                    >
                        {move || if create_open.get() { "Cancel" } else { "Add Employee" }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || !availability.get().biometric_test)
                        loading=biometric_pending
                        on_click=on_biometric_test
                    >
                        <i class="fas fa-fingerprint"></i>
                        "Test Biometric"
                    </Button>
                </div>
            </div>
            {move || {
                disconnected().then(|| {
                    let message = last_error
                        .get()
                        .unwrap_or_else(|| "Backend is not reachable.".to_string());
                    view! { <ErrorMessage message=message /> }
                })
            }}
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(status: ConnectivityStatus, error: Option<&'static str>) -> String {
        render_to_string(move || {
            let availability = ActionAvailability {
                refresh: true,
                add: status.is_connected(),
                edit: status.is_connected(),
                biometric_test: status.is_connected(),
            };
            view! {
                <StatusBar
                    connectivity=Signal::derive(move || status)
                    employee_count=Signal::derive(|| 3usize)
                    last_error=Signal::derive(move || error.map(str::to_string))
                    availability=Signal::derive(move || availability)
                    loading=Signal::derive(|| false)
                    create_open=Signal::derive(|| false)
                    biometric_pending=Signal::derive(|| false)
                    on_refresh=Callback::new(|_| {})
                    on_toggle_create=Callback::new(|_| {})
                    on_biometric_test=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn connected_bar_shows_live_chip_and_count() {
        let html = render(ConnectivityStatus::Connected, None);
        assert!(html.contains("Backend Live"));
        assert!(html.contains("3 employees"));
        assert!(html.contains("Add Employee"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn disconnected_bar_shows_recorded_error() {
        let html = render(
            ConnectivityStatus::Disconnected,
            Some("Backend not reachable at http://127.0.0.1:8000/api"),
        );
        assert!(html.contains("Backend Offline"));
        assert!(html.contains("Backend not reachable at http:"));
        assert!(html.contains("127.0.0.1:8000"));
    }
}
