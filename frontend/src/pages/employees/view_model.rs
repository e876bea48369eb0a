use super::{
    repository::EmployeesRepository,
    utils::{ActionAvailability, EditDraft, EmployeeForm},
};
use crate::{
    api::{ApiClient, ApiError, BiometricPunch, CreateEmployee, Employee},
    config::{self, RuntimeConfig},
    state::{
        directory::{find_by_biometric_id, use_directory_store, DirectoryStore},
        notification::{use_notifier, Notifier},
    },
};
use chrono::{DateTime, Utc};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BiometricTestOutcome {
    Synced { user_id: String },
    /// No loaded employee carries the test id; nothing was sent.
    MissingSeed { user_id: String },
}

/// Sends a synthetic punch for the configured test user, provided an
/// employee with that biometric id is currently loaded.
pub async fn run_biometric_test(
    repo: &EmployeesRepository,
    employees: &[Employee],
    config: &RuntimeConfig,
    now: DateTime<Utc>,
) -> Result<BiometricTestOutcome, ApiError> {
    let user_id = config.biometric_test_user_id.clone();
    if find_by_biometric_id(employees, &user_id).is_none() {
        return Ok(BiometricTestOutcome::MissingSeed { user_id });
    }

    let punch = BiometricPunch {
        user_id: user_id.clone(),
        timestamp: now,
        punch_type: config.biometric_punch_type,
        device_id: config.biometric_test_device_id.clone(),
    };
    repo.sync_biometric(punch).await?;
    Ok(BiometricTestOutcome::Synced { user_id })
}

/// What the page does once an action's outcome has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Nothing,
    Refetch,
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub store: DirectoryStore,
    pub notifier: Notifier,
    pub availability: Memo<ActionAvailability>,
    pub show_create_form: RwSignal<bool>,
    pub create_form: RwSignal<EmployeeForm>,
    pub edit_draft: RwSignal<Option<EditDraft>>,
    pub refresh_action: Action<(), ()>,
    pub create_action: Action<CreateEmployee, Result<Employee, ApiError>>,
    pub update_action: Action<EditDraft, Result<Employee, ApiError>>,
    pub biometric_action: Action<(), Result<BiometricTestOutcome, ApiError>>,
}

impl EmployeesViewModel {
    pub fn new(repository: EmployeesRepository, store: DirectoryStore, notifier: Notifier) -> Self {
        let state = store.state();
        let availability = create_memo(move |_| state.with(ActionAvailability::for_state));

        let repo_for_refresh = repository.clone();
        let refresh_action = create_action(move |_: &()| {
            let repo = repo_for_refresh.clone();
            async move { store.refresh(&repo).await }
        });

        let repo_for_create = repository.clone();
        let create_employee = create_action(move |payload: &CreateEmployee| {
            let repo = repo_for_create.clone();
            let payload = payload.clone();
            async move { repo.create_employee(payload).await }
        });

        let repo_for_update = repository.clone();
        let update_employee = create_action(move |draft: &EditDraft| {
            let repo = repo_for_update.clone();
            let employee_id = draft.employee_id;
            let method = config::current().update_method;
            let payload = draft.to_request(method);
            async move { repo.update_employee(employee_id, payload, method).await }
        });

        let repo_for_biometric = repository;
        let biometric_test = create_action(move |_: &()| {
            let repo = repo_for_biometric.clone();
            let employees = store.employees_untracked();
            let config = config::current();
            async move { run_biometric_test(&repo, &employees, &config, Utc::now()).await }
        });

        Self {
            store,
            notifier,
            availability,
            show_create_form: create_rw_signal(false),
            create_form: create_rw_signal(EmployeeForm::default()),
            edit_draft: create_rw_signal(None),
            refresh_action,
            create_action: create_employee,
            update_action: update_employee,
            biometric_action: biometric_test,
        }
    }

    pub fn refresh(&self) {
        self.refresh_action.dispatch(());
    }

    /// Opens or cancels the create form. Cancelling discards the draft.
    pub fn toggle_create_form(&self) {
        if self.show_create_form.get_untracked() {
            self.show_create_form.set(false);
            self.create_form.update(EmployeeForm::reset);
            return;
        }
        if self.availability.get_untracked().add {
            self.show_create_form.set(true);
        }
    }

    /// Validates the draft locally; only a complete draft reaches the backend.
    pub fn submit_create(&self) {
        if self.create_action.pending().get_untracked() || !self.availability.get_untracked().add {
            return;
        }
        let departments = self.store.departments_untracked();
        match self.create_form.get_untracked().validate(&departments) {
            Ok(payload) => self.create_action.dispatch(payload),
            Err(err) => self.notifier.error(format!("Error: {}", err)),
        }
    }

    pub fn on_create_result(&self, result: Result<Employee, ApiError>) -> FollowUp {
        match result {
            Ok(employee) => {
                self.create_form.update(EmployeeForm::reset);
                self.show_create_form.set(false);
                self.notifier.success(format!(
                    "Employee {} created successfully.",
                    employee.employee_code
                ));
                FollowUp::Refetch
            }
            Err(err) => {
                self.notifier
                    .error(format!("Error: {}", err.message_or("Check form data")));
                FollowUp::Nothing
            }
        }
    }

    pub fn open_edit(&self, employee: &Employee) {
        if !self.availability.get_untracked().edit {
            return;
        }
        self.edit_draft.set(Some(EditDraft::from_employee(employee)));
    }

    pub fn cancel_edit(&self) {
        self.edit_draft.set(None);
    }

    pub fn confirm_edit(&self) {
        if self.update_action.pending().get_untracked() || !self.availability.get_untracked().edit {
            return;
        }
        if let Some(draft) = self.edit_draft.get_untracked() {
            self.update_action.dispatch(draft);
        }
    }

    pub fn on_update_result(&self, result: Result<Employee, ApiError>) -> FollowUp {
        match result {
            Ok(_) => {
                self.edit_draft.set(None);
                self.notifier.success("Employee updated successfully.");
                FollowUp::Refetch
            }
            Err(err) => {
                self.notifier
                    .error(format!("Update failed: {}", err.message_or("Try again")));
                FollowUp::Nothing
            }
        }
    }

    pub fn trigger_biometric_test(&self) {
        if self.biometric_action.pending().get_untracked()
            || !self.availability.get_untracked().biometric_test
        {
            return;
        }
        self.biometric_action.dispatch(());
    }

    pub fn on_biometric_result(
        &self,
        result: Result<BiometricTestOutcome, ApiError>,
    ) -> FollowUp {
        match result {
            Ok(BiometricTestOutcome::Synced { user_id }) => {
                self.notifier
                    .success(format!("Biometric sync succeeded for user {}.", user_id));
                FollowUp::Refetch
            }
            Ok(BiometricTestOutcome::MissingSeed { user_id }) => {
                self.notifier.warning(format!(
                    "Create an employee with biometric_user_id \"{}\" first.",
                    user_id
                ));
                FollowUp::Nothing
            }
            Err(err) => {
                self.notifier
                    .error(format!("Biometric sync failed: {}", err.error));
                FollowUp::Nothing
            }
        }
    }

    fn apply(&self, follow_up: FollowUp) {
        if follow_up == FollowUp::Refetch {
            self.refresh();
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));
    let vm = EmployeesViewModel::new(repository, use_directory_store(), use_notifier());

    create_effect(move |_| {
        if let Some(result) = vm.create_action.value().get() {
            vm.apply(vm.on_create_result(result));
        }
    });

    create_effect(move |_| {
        if let Some(result) = vm.update_action.value().get() {
            vm.apply(vm.on_update_result(result));
        }
    });

    create_effect(move |_| {
        if let Some(result) = vm.biometric_action.value().get() {
            vm.apply(vm.on_biometric_result(result));
        }
    });

    vm
}
