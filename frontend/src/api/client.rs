use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config, config::UpdateMethod};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::api_base_url(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(status.as_u16(), &body);
        log::warn!("backend rejected request ({}): {}", status, error.error);
        Err(error)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.send_json(self.client.get(self.endpoint("employees/")))
            .await
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.send_json(self.client.get(self.endpoint("departments/")))
            .await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        self.send_json(self.client.post(self.endpoint("employees/")).json(payload))
            .await
    }

    pub async fn update_employee(
        &self,
        employee_id: i64,
        payload: &UpdateEmployee,
        method: UpdateMethod,
    ) -> Result<Employee, ApiError> {
        let method = match method {
            UpdateMethod::Put => Method::PUT,
            UpdateMethod::Patch => Method::PATCH,
        };
        let url = self.endpoint(&format!("employees/{}/", employee_id));
        self.send_json(self.client.request(method, url).json(payload))
            .await
    }

    pub async fn sync_biometric(
        &self,
        punch: &BiometricPunch,
    ) -> Result<BiometricSyncResponse, ApiError> {
        let response = self
            .send(self.client.post(self.endpoint("biometric/sync/")).json(punch))
            .await?;
        // The sync endpoint's success body is informational only.
        Ok(response.json().await.unwrap_or_default())
    }
}
