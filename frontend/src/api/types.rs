use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Department {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// The backend returns the department as a bare foreign key; older
/// serializers nested the whole object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentRef {
    Id(i64),
    Nested(Department),
}

impl DepartmentRef {
    pub fn id(&self) -> i64 {
        match self {
            DepartmentRef::Id(id) => *id,
            DepartmentRef::Nested(dept) => dept.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    Other(String),
    Unknown,
}

impl EmployeeStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => EmployeeStatus::Unknown,
            "active" => EmployeeStatus::Active,
            "inactive" => EmployeeStatus::Inactive,
            "on_leave" => EmployeeStatus::OnLeave,
            _ => EmployeeStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            EmployeeStatus::Active => "ACTIVE".into(),
            EmployeeStatus::Inactive => "INACTIVE".into(),
            EmployeeStatus::OnLeave => "ON LEAVE".into(),
            EmployeeStatus::Other(raw) => raw.to_uppercase(),
            EmployeeStatus::Unknown => "N/A".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_code: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub biometric_user_id: Option<String>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
    #[serde(default)]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Employee {
    /// Server-computed `full_name` when present, otherwise first + last.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.full_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return name.to_string();
            }
        }
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn department_id(&self) -> Option<i64> {
        self.department.as_ref().map(DepartmentRef::id)
    }

    pub fn biometric_id(&self) -> Option<&str> {
        self.biometric_user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn status(&self) -> EmployeeStatus {
        match (self.status.as_deref(), self.is_active) {
            (Some(raw), _) if !raw.trim().is_empty() => EmployeeStatus::parse(raw),
            (_, Some(true)) => EmployeeStatus::Active,
            (_, Some(false)) => EmployeeStatus::Inactive,
            _ => EmployeeStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEmployee {
    pub employee_code: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biometric_user_id: Option<String>,
    pub department: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<NaiveDate>,
}

/// Body of the edit dialog's save. A partial update carries only the
/// dialog fields; a full replacement also carries the loaded record's
/// remaining required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub biometric_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchType {
    #[default]
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

fn serialize_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiometricPunch {
    pub user_id: String,
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
    pub punch_type: PunchType,
    pub device_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BiometricSyncResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub status: Option<u16>,
    pub details: Option<Value>,
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    /// Turns a non-2xx response into an error, pulling the most useful
    /// message out of the body: `detail`, `error`, then DRF field errors.
    pub fn from_response(status: u16, body: &str) -> Self {
        let details = serde_json::from_str::<Value>(body).ok();
        let message = details
            .as_ref()
            .and_then(message_from_body)
            .unwrap_or_else(|| format!("HTTP {}", status));
        let code = match status {
            400 | 422 => "VALIDATION_ERROR",
            404 => "NOT_FOUND",
            500..=599 => "SERVER_ERROR",
            _ => "HTTP_ERROR",
        };
        Self {
            error: message,
            code: code.to_string(),
            status: Some(status),
            details,
        }
    }

    pub fn is_network(&self) -> bool {
        self.code == "REQUEST_FAILED"
    }

    /// The backend's own message if it sent one; `fallback` when the
    /// response carried only a status code.
    pub fn message_or(&self, fallback: &str) -> String {
        let from_body = self.details.as_ref().and_then(message_from_body).is_some();
        if from_body || self.status.is_none() {
            self.error.clone()
        } else {
            fallback.to_string()
        }
    }
}

fn message_from_body(body: &Value) -> Option<String> {
    let obj = body.as_object()?;
    for key in ["detail", "error"] {
        if let Some(text) = obj.get(key).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }

    let field_errors: Vec<String> = obj
        .iter()
        .filter_map(|(field, value)| {
            let messages = match value {
                Value::String(text) => vec![text.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            };
            if messages.is_empty() {
                return None;
            }
            let joined = messages.join(" ");
            if field == "non_field_errors" {
                Some(joined)
            } else {
                Some(format!("{}: {}", field, joined))
            }
        })
        .collect();

    if field_errors.is_empty() {
        None
    } else {
        Some(field_errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn employee_json() -> Value {
        json!({
            "id": 7,
            "employee_code": "E-007",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "",
            "biometric_user_id": "12345",
            "department": 2,
            "date_of_joining": "2024-03-01",
            "base_salary": "0.00",
            "status": "on_leave",
            "user": null,
            "default_shift": null
        })
    }

    #[wasm_bindgen_test]
    fn deserialize_backend_employee_ignores_unknown_fields() {
        let employee: Employee = serde_json::from_value(employee_json()).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.department_id(), Some(2));
        assert_eq!(employee.biometric_id(), Some("12345"));
        assert_eq!(employee.status(), EmployeeStatus::OnLeave);
        assert_eq!(
            employee.date_of_joining,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[wasm_bindgen_test]
    fn nested_department_and_legacy_is_active_are_reconciled() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "employee_code": "E-1",
            "name": "legacy",
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "department": { "id": 3, "name": "Engineering", "code": "ENG" },
            "is_active": false
        }))
        .unwrap();
        assert_eq!(employee.department_id(), Some(3));
        assert_eq!(employee.status(), EmployeeStatus::Inactive);
        assert_eq!(employee.display_name(), "Grace Hopper");
        assert_eq!(employee.biometric_id(), None);
    }

    #[wasm_bindgen_test]
    fn status_labels_cover_every_variant() {
        assert_eq!(EmployeeStatus::parse("Active").label(), "ACTIVE");
        assert_eq!(EmployeeStatus::parse("inactive").label(), "INACTIVE");
        assert_eq!(EmployeeStatus::parse("on_leave").label(), "ON LEAVE");
        assert_eq!(EmployeeStatus::parse("probation").label(), "PROBATION");
        assert_eq!(EmployeeStatus::parse("  ").label(), "N/A");
    }

    #[wasm_bindgen_test]
    fn create_employee_omits_empty_optionals() {
        let payload = CreateEmployee {
            employee_code: "E-9".into(),
            first_name: "Linus".into(),
            last_name: None,
            email: "linus@example.com".into(),
            biometric_user_id: None,
            department: 4,
            date_of_joining: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "employee_code": "E-9",
                "first_name": "Linus",
                "email": "linus@example.com",
                "department": 4
            })
        );
    }

    #[wasm_bindgen_test]
    fn biometric_punch_uses_millisecond_utc_timestamp() {
        let punch = BiometricPunch {
            user_id: "12345".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 1, 2, 9, 30, 0).unwrap(),
            punch_type: PunchType::In,
            device_id: "TEST-DEVICE".into(),
        };
        let value = serde_json::to_value(&punch).unwrap();
        assert_eq!(value["timestamp"], json!("2025-01-02T09:30:00.000Z"));
        assert_eq!(value["punch_type"], json!("IN"));
        assert_eq!(value["device_id"], json!("TEST-DEVICE"));
    }

    #[wasm_bindgen_test]
    fn error_body_prefers_detail_then_error() {
        let err = ApiError::from_response(400, r#"{"detail":"Duplicate code","error":"x"}"#);
        assert_eq!(err.error, "Duplicate code");
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.status, Some(400));

        let err = ApiError::from_response(404, r#"{"error":"Employee not found"}"#);
        assert_eq!(err.error, "Employee not found");
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[wasm_bindgen_test]
    fn error_body_flattens_field_errors() {
        let err = ApiError::from_response(
            400,
            r#"{"email":["Enter a valid email address."],"non_field_errors":["Bad combo."]}"#,
        );
        assert!(err.error.contains("email: Enter a valid email address."));
        assert!(err.error.contains("Bad combo."));
        assert!(!err.error.contains("non_field_errors"));
    }

    #[wasm_bindgen_test]
    fn unreadable_error_body_falls_back_to_status() {
        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.error, "HTTP 502");
        assert_eq!(err.code, "SERVER_ERROR");
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "HTTP 502");
        assert_eq!(err.message_or("Try again"), "Try again");
    }

    #[wasm_bindgen_test]
    fn message_or_keeps_backend_and_network_messages() {
        let backend = ApiError::from_response(400, r#"{"detail":"Email taken"}"#);
        assert_eq!(backend.message_or("Check form data"), "Email taken");

        let network = ApiError::request_failed("Request failed: connection refused");
        assert_eq!(
            network.message_or("Check form data"),
            "Request failed: connection refused"
        );
    }
}
