use crate::{
    api::{Department, Employee},
    components::empty_state::EmptyState,
    pages::employees::utils::{
        biometric_badge, department_code, department_name, status_badge, BadgeTone,
    },
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeColumn {
    Code,
    Name,
    Email,
    DepartmentCode,
    DepartmentName,
    Biometric,
    Status,
    Actions,
}

impl EmployeeColumn {
    pub const CONSOLE: &'static [EmployeeColumn] = &[
        EmployeeColumn::Code,
        EmployeeColumn::Name,
        EmployeeColumn::Email,
        EmployeeColumn::DepartmentCode,
        EmployeeColumn::Biometric,
        EmployeeColumn::Status,
        EmployeeColumn::Actions,
    ];

    pub const ROSTER: &'static [EmployeeColumn] = &[
        EmployeeColumn::Code,
        EmployeeColumn::Name,
        EmployeeColumn::Email,
        EmployeeColumn::DepartmentName,
        EmployeeColumn::Biometric,
        EmployeeColumn::Status,
        EmployeeColumn::Actions,
    ];

    pub fn header(self) -> &'static str {
        match self {
            EmployeeColumn::Code => "Code",
            EmployeeColumn::Name => "Name",
            EmployeeColumn::Email => "Email",
            EmployeeColumn::DepartmentCode | EmployeeColumn::DepartmentName => "Department",
            EmployeeColumn::Biometric => "Biometric ID",
            EmployeeColumn::Status => "Status",
            EmployeeColumn::Actions => "Actions",
        }
    }
}

/// What a single cell shows. Actions are rendered by the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Badge(String, BadgeTone),
    Actions,
}

pub fn cell_content(
    column: EmployeeColumn,
    employee: &Employee,
    departments: &[Department],
) -> CellContent {
    match column {
        EmployeeColumn::Code => CellContent::Text(employee.employee_code.clone()),
        EmployeeColumn::Name => CellContent::Text(employee.display_name()),
        EmployeeColumn::Email => CellContent::Text(employee.email.clone()),
        EmployeeColumn::DepartmentCode => {
            CellContent::Text(department_code(employee, departments))
        }
        EmployeeColumn::DepartmentName => {
            CellContent::Text(department_name(employee, departments))
        }
        EmployeeColumn::Biometric => {
            let (label, tone) = biometric_badge(employee);
            CellContent::Badge(label, tone)
        }
        EmployeeColumn::Status => {
            let (label, tone) = status_badge(&employee.status());
            CellContent::Badge(label, tone)
        }
        EmployeeColumn::Actions => CellContent::Actions,
    }
}

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] departments: Signal<Vec<Department>>,
    columns: &'static [EmployeeColumn],
    #[prop(into)] edit_enabled: Signal<bool>,
    on_edit: Callback<Employee>,
) -> impl IntoView {
    let render_row = move |employee: Employee, departments: &[Department]| {
        let cells = columns
            .iter()
            .map(|column| match cell_content(*column, &employee, departments) {
                CellContent::Text(text) => view! {
                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{text}</td>
                }
                .into_view(),
                CellContent::Badge(label, tone) => view! {
                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                        <span class=format!(
                            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
                            tone.classes()
                        )>{label}</span>
                    </td>
                }
                .into_view(),
                CellContent::Actions => {
                    let selected = employee.clone();
                    view! {
                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                            <button
                                type="button"
                                class="text-action-primary-bg hover:text-action-primary-bg-hover disabled:opacity-50 disabled:cursor-not-allowed"
                                aria-label=format!("Edit {}", employee.employee_code)
                                disabled=move || !edit_enabled.get()
                                on:click=move |_| on_edit.call(selected.clone())
                            >
                                <i class="fas fa-edit"></i>
                            </button>
                        </td>
                    }
                    .into_view()
                }
            })
            .collect_view();
        view! { <tr class="hover:bg-surface-muted">{cells}</tr> }
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-fg">
                {move || format!("Employees ({})", employees.with(Vec::len))}
            </h2>
            <Show
                when=move || !employees.with(Vec::is_empty)
                fallback=|| view! {
                    <EmptyState
                        title="No employees yet"
                        description="Create one with Add Employee above."
                    />
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                {columns
                                    .iter()
                                    .map(|column| view! {
                                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                            {column.header()}
                                        </th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="bg-surface-elevated divide-y divide-border">
                            {move || {
                                let departments = departments.get();
                                employees
                                    .get()
                                    .into_iter()
                                    .map(|employee| render_row(employee, &departments))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
