use crate::{
    api::{
        ApiClient, ApiError, BiometricPunch, BiometricSyncResponse, CreateEmployee, Department,
        Employee, UpdateEmployee,
    },
    config::UpdateMethod,
};
use futures::future::try_join;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorySnapshot {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
}

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> String {
        self.client.base_url()
    }

    /// Both collections are requested together; either failing fails both.
    pub async fn fetch_directory(&self) -> Result<DirectorySnapshot, ApiError> {
        let (employees, departments) =
            try_join(self.client.list_employees(), self.client.list_departments()).await?;
        Ok(DirectorySnapshot {
            employees,
            departments,
        })
    }

    pub async fn create_employee(&self, payload: CreateEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn update_employee(
        &self,
        employee_id: i64,
        payload: UpdateEmployee,
        method: UpdateMethod,
    ) -> Result<Employee, ApiError> {
        self.client
            .update_employee(employee_id, &payload, method)
            .await
    }

    pub async fn sync_biometric(
        &self,
        punch: BiometricPunch,
    ) -> Result<BiometricSyncResponse, ApiError> {
        self.client.sync_biometric(&punch).await
    }
}
