use crate::{
    api::Employee,
    components::common::{Button, ButtonVariant},
    config,
    pages::employees::{
        components::{
            edit_dialog::EditEmployeeDialog,
            table::{EmployeeColumn, EmployeeTable},
        },
        layout::{ConnectingScreen, EmployeesFrame},
        view_model::use_employees_view_model,
    },
    state::directory::ConnectivityStatus,
};
use leptos::*;

/// Read-mostly listing of the same directory the console manages.
#[component]
pub fn RosterPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let state = vm.store.state();
    let availability = vm.availability;

    create_effect(move |_| vm.refresh());

    view! {
        <Show
            when=move || state.with(|s| s.connectivity != ConnectivityStatus::Checking)
            fallback=|| view! { <ConnectingScreen base_url=config::api_base_url() /> }
        >
            <EmployeesFrame
                title="Employee Roster"
                description="All employees with their department and biometric enrollment."
            >
                <div class="flex justify-end">
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || !availability.get().refresh)
                        loading=Signal::derive(move || state.with(|s| s.loading))
                        on_click=Callback::new(move |_| vm.refresh())
                    >
                        "Refresh"
                    </Button>
                </div>
                <EmployeeTable
                    employees=vm.store.employees()
                    departments=vm.store.departments()
                    columns=EmployeeColumn::ROSTER
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
