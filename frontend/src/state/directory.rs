use crate::{
    api::{ApiError, Department, Employee},
    pages::employees::repository::{DirectorySnapshot, EmployeesRepository},
};
use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectivityStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

impl ConnectivityStatus {
    pub fn is_connected(self) -> bool {
        self == ConnectivityStatus::Connected
    }
}

/// Employees and departments as of the last successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub connectivity: ConnectivityStatus,
    pub last_error: Option<String>,
    pub loading: bool,
    generation: u64,
}

impl DirectoryState {
    /// Marks a fetch as in flight and returns its ticket.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.generation
    }

    /// Applies a fetch result. Results from superseded fetches are dropped
    /// and `false` is returned.
    pub fn apply_fetch(
        &mut self,
        ticket: u64,
        result: Result<DirectorySnapshot, String>,
    ) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.employees = snapshot.employees;
                self.departments = snapshot.departments;
                self.connectivity = ConnectivityStatus::Connected;
                self.last_error = None;
            }
            Err(message) => {
                self.connectivity = ConnectivityStatus::Disconnected;
                self.last_error = Some(message);
            }
        }
        true
    }

    pub fn mutations_enabled(&self) -> bool {
        self.connectivity.is_connected()
    }

    pub fn department(&self, id: i64) -> Option<&Department> {
        self.departments.iter().find(|dept| dept.id == id)
    }

    pub fn find_by_biometric_id(&self, biometric_id: &str) -> Option<&Employee> {
        find_by_biometric_id(&self.employees, biometric_id)
    }
}

pub fn find_by_biometric_id<'a>(employees: &'a [Employee], biometric_id: &str) -> Option<&'a Employee> {
    employees
        .iter()
        .find(|employee| employee.biometric_id() == Some(biometric_id))
}

pub fn describe_fetch_error(base_url: &str, error: &ApiError) -> String {
    if error.is_network() {
        format!(
            "Backend not reachable at {}. Start the API server, then press Refresh.",
            base_url
        )
    } else {
        format!("Backend at {} returned an error: {}", base_url, error.error)
    }
}

#[derive(Clone, Copy)]
pub struct DirectoryStore {
    state: RwSignal<DirectoryState>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(DirectoryState::default()),
        }
    }

    pub fn state(&self) -> RwSignal<DirectoryState> {
        self.state
    }

    pub fn employees(&self) -> Signal<Vec<Employee>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.employees.clone()))
    }

    pub fn departments(&self) -> Signal<Vec<Department>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.departments.clone()))
    }

    pub fn connectivity(&self) -> Signal<ConnectivityStatus> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.connectivity))
    }

    pub fn employees_untracked(&self) -> Vec<Employee> {
        self.state
            .try_with_untracked(|s| s.employees.clone())
            .unwrap_or_default()
    }

    pub fn departments_untracked(&self) -> Vec<Department> {
        self.state
            .try_with_untracked(|s| s.departments.clone())
            .unwrap_or_default()
    }

    /// Fetches employees and departments together and replaces both lists
    /// on success. Writes after the store was disposed are dropped.
    pub async fn refresh(self, repo: &EmployeesRepository) {
        let Some(ticket) = self.state.try_update(DirectoryState::begin_fetch) else {
            return;
        };
        let result = repo.fetch_directory().await.map_err(|err| {
            log::error!("directory fetch failed: {}", err);
            describe_fetch_error(&repo.base_url(), &err)
        });
        if let Ok(snapshot) = &result {
            log::info!(
                "directory loaded: {} employees, {} departments",
                snapshot.employees.len(),
                snapshot.departments.len()
            );
        }
        let applied = self
            .state
            .try_update(|state| state.apply_fetch(ticket, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("discarded stale directory response (ticket {})", ticket);
        }
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_directory_store() -> DirectoryStore {
    let store = DirectoryStore::new();
    provide_context(store);
    store
}

pub fn use_directory_store() -> DirectoryStore {
    match use_context::<DirectoryStore>() {
        Some(store) => store,
        None => provide_directory_store(),
    }
}
