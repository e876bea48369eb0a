use crate::state::notification::Notifier;
use leptos::*;

#[component]
pub fn NotificationToast(notifier: Notifier) -> impl IntoView {
    let state = notifier.state();

    view! {
        <Show when=move || state.with(|n| n.open)>
            <div
                class="fixed bottom-4 right-4 z-[80] max-w-sm"
                role="status"
                aria-live="polite"
            >
                <div class=move || {
                    format!(
                        "flex items-start gap-3 rounded-lg border px-4 py-3 shadow-lg {}",
                        state.with(|n| n.severity.classes())
                    )
                }>
                    <i class=move || state.with(|n| n.severity.icon()) aria-hidden="true"></i>
                    <p class="flex-1 text-sm">{move || state.with(|n| n.message.clone())}</p>
                    <button
                        type="button"
                        aria-label="Dismiss"
                        class="opacity-70 hover:opacity-100"
                        on:click=move |_| notifier.close()
                    >
                        {"✕"}
                    </button>
                </div>
            </div>
        </Show>
    }
}
