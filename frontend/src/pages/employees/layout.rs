use crate::components::layout::LoadingSpinner;
use leptos::*;

#[component]
pub fn ConnectingScreen(#[prop(into)] base_url: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-2">
            <LoadingSpinner label="Connecting to backend..." />
            <p class="text-xs text-fg-muted">{base_url}</p>
        </div>
    }
}

#[component]
pub fn EmployeesFrame(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{title}</h1>
                <p class="mt-1 text-sm text-fg-muted">{description}</p>
            </div>
            {children()}
        </div>
    }
}
