use crate::{
    components::{confirm_dialog::ConfirmDialog, forms::TextField},
    pages::employees::utils::EditDraft,
};
use leptos::*;

#[component]
pub fn EditEmployeeDialog(
    draft: RwSignal<Option<EditDraft>>,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || draft.with(Option::is_some));
    let title = Signal::derive(move || {
        draft.with(|d| {
            d.as_ref()
                .map(|d| format!("Edit Employee {}", d.employee_code))
                .unwrap_or_default()
        })
    });
    let field = move |read: fn(&EditDraft) -> &String| {
        Signal::derive(move || {
            draft.with(|d| d.as_ref().map(|d| read(d).clone()).unwrap_or_default())
        })
    };
    let setter = move |write: fn(&mut EditDraft, String)| {
        Callback::new(move |value: String| {
            draft.update(|d| {
                if let Some(d) = d.as_mut() {
                    write(d, value);
                }
            })
        })
    };

    view! {
        <ConfirmDialog
            is_open=is_open
            title=title
            on_confirm=on_confirm
            on_cancel=on_cancel
            pending=pending
        >
            <TextField
                label="Full Name"
                value=field(|d| &d.full_name)
                on_input=setter(|d, v| d.full_name = v)
            />
            <TextField
                label="Email"
                value=field(|d| &d.email)
                on_input=setter(|d, v| d.email = v)
                input_type="email"
            />
            <TextField
                label="Biometric User ID"
                value=field(|d| &d.biometric_user_id)
                on_input=setter(|d, v| d.biometric_user_id = v)
                placeholder="Leave blank to clear"
            />
        </ConfirmDialog>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dialog_shows_draft_fields() {
        let html = render_to_string(move || {
            let draft = create_rw_signal(Some(EditDraft::from_employee(&employee(7, Some("12345")))));
            view! {
                <EditEmployeeDialog
                    draft=draft
                    pending=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Edit Employee E-007"));
        assert!(html.contains("Full Name"));
        assert!(html.contains("Biometric User ID"));
    }

    #[test]
    fn dialog_hidden_without_draft() {
        let html = render_to_string(move || {
            view! {
                <EditEmployeeDialog
                    draft=create_rw_signal(None)
                    pending=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
