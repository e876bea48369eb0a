use crate::{api::Employee, config};
use leptos::*;

use super::{
    components::{
        create_form::CreateEmployeeForm,
        departments::DepartmentChips,
        edit_dialog::EditEmployeeDialog,
        status_bar::StatusBar,
        table::{EmployeeColumn, EmployeeTable},
    },
    layout::{ConnectingScreen, EmployeesFrame},
    view_model::use_employees_view_model,
};
use crate::state::directory::ConnectivityStatus;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let state = vm.store.state();

    create_effect(move |_| vm.refresh());

    let checking = move || state.with(|s| s.connectivity == ConnectivityStatus::Checking);
    let availability = vm.availability;

    view! {
        <Show
            when=move || !checking()
            fallback=|| view! { <ConnectingScreen base_url=config::api_base_url() /> }
        >
            <EmployeesFrame
                title="Employee Management"
                description="Create and edit employees, check backend connectivity and send a test biometric punch."
            >
                <StatusBar
                    connectivity=vm.store.connectivity()
                    employee_count=Signal::derive(move || state.with(|s| s.employees.len()))
                    last_error=Signal::derive(move || state.with(|s| s.last_error.clone()))
                    availability=availability
                    loading=Signal::derive(move || state.with(|s| s.loading))
                    create_open=vm.show_create_form
                    biometric_pending=vm.biometric_action.pending()
                    on_refresh=Callback::new(move |_| vm.refresh())
                    on_toggle_create=Callback::new(move |_| vm.toggle_create_form())
                    on_biometric_test=Callback::new(move |_| vm.trigger_biometric_test())
                />
                <Show when=move || vm.show_create_form.get() && availability.get().add>
                    <CreateEmployeeForm
                        form=vm.create_form
                        departments=vm.store.departments()
                        pending=vm.create_action.pending()
                        on_submit=Callback::new(move |_| vm.submit_create())
                    />
                </Show>
                <DepartmentChips departments=vm.store.departments() />
                <EmployeeTable
                    employees=vm.store.employees()
                    departments=vm.store.departments()
                    columns=EmployeeColumn::CONSOLE
                    edit_enabled=Signal::derive(move || availability.get().edit)
                    on_edit=Callback::new(move |employee: Employee| vm.open_edit(&employee))
                />
            </EmployeesFrame>
            <EditEmployeeDialog
                draft=vm.edit_draft
                pending=vm.update_action.pending()
                on_confirm=Callback::new(move |_| vm.confirm_edit())
                on_cancel=Callback::new(move |_| vm.cancel_edit())
            />
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_starts_in_connecting_state() {
        let html = render_to_string(move || view! { <EmployeesPage /> });
        assert!(html.contains("Connecting to backend..."));
        assert!(!html.contains("Employee Management"));
    }
}
