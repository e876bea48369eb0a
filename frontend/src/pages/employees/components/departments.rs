use crate::api::Department;
use leptos::*;

#[component]
pub fn DepartmentChips(#[prop(into)] departments: Signal<Vec<Department>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <h2 class="text-lg font-medium text-fg">
                {move || format!("Departments ({})", departments.with(Vec::len))}
            </h2>
            <Show
                when=move || !departments.with(Vec::is_empty)
                fallback=|| view! { <p class="text-sm text-fg-muted">"No departments loaded."</p> }
            >
                <div class="flex flex-wrap gap-2">
                    {move || {
                        departments
                            .get()
                            .into_iter()
                            .map(|dept| view! {
                                <span class="inline-flex items-center rounded-full bg-surface-muted border border-border px-3 py-1 text-xs font-medium text-fg">
                                    {dept.label()}
                                </span>
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::department;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn chips_render_in_received_order_with_count() {
        let html = render_to_string(move || {
            let departments = vec![department(2, "ENG"), department(1, "HR")];
            view! { <DepartmentChips departments=Signal::derive(move || departments.clone()) /> }
        });
        assert!(html.contains("Departments (2)"));
        let eng = html.find("Dept ENG (ENG)").unwrap();
        let hr = html.find("Dept HR (HR)").unwrap();
        assert!(eng < hr);
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let html = render_to_string(move || {
            view! { <DepartmentChips departments=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("No departments loaded."));
    }
}
