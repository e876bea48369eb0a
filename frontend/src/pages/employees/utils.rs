use crate::{
    api::{CreateEmployee, Department, DepartmentRef, Employee, EmployeeStatus, UpdateEmployee},
    config::UpdateMethod,
    state::directory::DirectoryState,
};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required.")]
    Missing(&'static str),
    #[error("\"{0}\" is not a valid email address.")]
    InvalidEmail(String),
    #[error("Select a department from the list.")]
    UnknownDepartment,
    #[error("Joining date must be YYYY-MM-DD.")]
    InvalidDate,
}

fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn require(value: &str, field: &'static str) -> Result<String, FormError> {
    trimmed(value).ok_or(FormError::Missing(field))
}

pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Draft of a new employee as typed into the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub biometric_user_id: String,
    pub department: String,
    pub date_of_joining: String,
}

impl EmployeeForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self, departments: &[Department]) -> Result<CreateEmployee, FormError> {
        let employee_code = require(&self.employee_code, "Employee code")?;
        let first_name = require(&self.first_name, "First name")?;
        let email = require(&self.email, "Email")?;
        if !looks_like_email(&email) {
            return Err(FormError::InvalidEmail(email));
        }
        let department_raw = require(&self.department, "Department")?;
        let department = department_raw
            .parse::<i64>()
            .ok()
            .filter(|id| departments.iter().any(|dept| dept.id == *id))
            .ok_or(FormError::UnknownDepartment)?;
        let date_of_joining = match trimmed(&self.date_of_joining) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| FormError::InvalidDate)?,
            ),
            None => None,
        };

        Ok(CreateEmployee {
            employee_code,
            first_name,
            last_name: trimmed(&self.last_name),
            email,
            biometric_user_id: trimmed(&self.biometric_user_id),
            department,
            date_of_joining,
        })
    }
}

/// Local copy of the fields the edit dialog exposes, plus what was loaded so
/// that an untouched name is sent back exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub employee_id: i64,
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub biometric_user_id: String,
    loaded_full_name: String,
    loaded_first_name: String,
    loaded_last_name: String,
    department: Option<i64>,
    date_of_joining: Option<NaiveDate>,
    status: Option<String>,
}

impl EditDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        let full_name = employee.display_name();
        Self {
            employee_id: employee.id,
            employee_code: employee.employee_code.clone(),
            full_name: full_name.clone(),
            email: employee.email.clone(),
            biometric_user_id: employee.biometric_user_id.clone().unwrap_or_default(),
            loaded_full_name: full_name,
            loaded_first_name: employee.first_name.clone(),
            loaded_last_name: employee.last_name.clone(),
            department: employee.department_id(),
            date_of_joining: employee.date_of_joining,
            status: employee.status.clone(),
        }
    }

    fn name_parts(&self) -> (String, String) {
        let unchanged = self.full_name.trim() == self.loaded_full_name.trim();
        if unchanged && !self.loaded_first_name.trim().is_empty() {
            (self.loaded_first_name.clone(), self.loaded_last_name.clone())
        } else {
            split_full_name(&self.full_name)
        }
    }

    pub fn to_request(&self, method: UpdateMethod) -> UpdateEmployee {
        let (first_name, last_name) = self.name_parts();
        let partial = UpdateEmployee {
            first_name,
            last_name,
            email: self.email.trim().to_string(),
            biometric_user_id: trimmed(&self.biometric_user_id),
            ..Default::default()
        };
        match method {
            UpdateMethod::Patch => partial,
            UpdateMethod::Put => UpdateEmployee {
                employee_code: Some(self.employee_code.clone()),
                department: self.department,
                date_of_joining: self.date_of_joining,
                status: self.status.clone(),
                ..partial
            },
        }
    }
}

/// "Ada King Lovelace" -> ("Ada", "King Lovelace").
pub fn split_full_name(full_name: &str) -> (String, String) {
    let full_name = full_name.trim();
    match full_name.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (full_name.to_string(), String::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Neutral,
}

impl BadgeTone {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeTone::Success => "bg-status-success-bg text-status-success-text",
            BadgeTone::Warning => "bg-status-warning-bg text-status-warning-text",
            BadgeTone::Neutral => "bg-surface-muted text-fg-muted",
        }
    }
}

pub fn status_badge(status: &EmployeeStatus) -> (String, BadgeTone) {
    let tone = match status {
        EmployeeStatus::Active => BadgeTone::Success,
        EmployeeStatus::Unknown => BadgeTone::Neutral,
        _ => BadgeTone::Warning,
    };
    (status.label(), tone)
}

pub fn biometric_badge(employee: &Employee) -> (String, BadgeTone) {
    match employee.biometric_id() {
        Some(id) => (id.to_string(), BadgeTone::Success),
        None => ("Not Set".to_string(), BadgeTone::Neutral),
    }
}

pub fn department_code(employee: &Employee, departments: &[Department]) -> String {
    lookup_department(employee, departments)
        .map(|dept| dept.code.clone())
        .unwrap_or_else(|| "N/A".into())
}

pub fn department_name(employee: &Employee, departments: &[Department]) -> String {
    lookup_department(employee, departments)
        .map(|dept| dept.name.clone())
        .unwrap_or_else(|| "N/A".into())
}

fn lookup_department<'a>(
    employee: &'a Employee,
    departments: &'a [Department],
) -> Option<&'a Department> {
    match employee.department.as_ref()? {
        DepartmentRef::Nested(dept) => Some(dept),
        DepartmentRef::Id(id) => departments.iter().find(|dept| dept.id == *id),
    }
}

/// Which toolbar and row actions are enabled for the current directory state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionAvailability {
    pub refresh: bool,
    pub add: bool,
    pub edit: bool,
    pub biometric_test: bool,
}

impl ActionAvailability {
    pub fn for_state(state: &DirectoryState) -> Self {
        let mutations = state.mutations_enabled();
        Self {
            refresh: !state.loading,
            add: mutations,
            edit: mutations,
            biometric_test: mutations,
        }
    }
}
