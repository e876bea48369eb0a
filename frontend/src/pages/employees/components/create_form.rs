use crate::{
    api::Department,
    components::{
        common::Button,
        forms::{SelectField, TextField},
    },
    pages::employees::utils::EmployeeForm,
};
use leptos::{ev, *};

fn department_options(departments: &[Department]) -> Vec<(String, String)> {
    departments
        .iter()
        .map(|dept| (dept.id.to_string(), dept.label()))
        .collect()
}

#[component]
pub fn CreateEmployeeForm(
    form: RwSignal<EmployeeForm>,
    #[prop(into)] departments: Signal<Vec<Department>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&EmployeeForm) -> &String| {
        Signal::derive(move || form.with(|state| read(state).clone()))
    };
    let setter = move |write: fn(&mut EmployeeForm, String)| {
        Callback::new(move |value: String| form.update(|state| write(state, value)))
    };
    let options = Signal::derive(move || departments.with(|list| department_options(list)));

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">"New Employee"</h2>
                <p class="text-sm text-fg-muted">"Fields marked * are required."</p>
            </div>
            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=handle_submit>
                <TextField
                    label="Employee Code"
                    value=field(|f| &f.employee_code)
                    on_input=setter(|f, v| f.employee_code = v)
                    placeholder="EMP-001"
                    required=true
                />
                <TextField
                    label="Email"
                    value=field(|f| &f.email)
                    on_input=setter(|f, v| f.email = v)
                    input_type="email"
                    required=true
                />
                <TextField
                    label="First Name"
                    value=field(|f| &f.first_name)
                    on_input=setter(|f, v| f.first_name = v)
                    required=true
                />
                <TextField
                    label="Last Name"
                    value=field(|f| &f.last_name)
                    on_input=setter(|f, v| f.last_name = v)
                />
                <SelectField
                    label="Department"
                    value=field(|f| &f.department)
                    options=options
                    on_change=setter(|f, v| f.department = v)
                    placeholder="Select a department"
                    required=true
                />
                <TextField
                    label="Biometric User ID"
                    value=field(|f| &f.biometric_user_id)
                    on_input=setter(|f, v| f.biometric_user_id = v)
                    placeholder="12345"
                />
                <TextField
                    label="Date of Joining"
                    value=field(|f| &f.date_of_joining)
                    on_input=setter(|f, v| f.date_of_joining = v)
                    input_type="date"
                />
                <div class="md:col-span-2 flex justify-end">
                    <Button loading=pending submit=true>
                        {move || if pending.get() { "Creating..." } else { "Create Employee" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
