#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(test)]
pub mod fixtures {
    use crate::api::{Department, DepartmentRef, Employee};
    use serde_json::{json, Value};

    /// Active employee in department 1.
    pub fn employee(id: i64, biometric_user_id: Option<&str>) -> Employee {
        Employee {
            id,
            employee_code: format!("E-{:03}", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            full_name: Some(format!("First{} Last{}", id, id)),
            email: format!("employee{}@example.com", id),
            biometric_user_id: biometric_user_id.map(str::to_string),
            department: Some(DepartmentRef::Id(1)),
            date_of_joining: None,
            status: Some("active".into()),
            is_active: None,
        }
    }

    pub fn department(id: i64, code: &str) -> Department {
        Department {
            id,
            name: format!("Dept {}", code),
            code: code.to_string(),
            is_active: Some(true),
        }
    }

    /// Wire shape of [`employee`] as the backend serializes it.
    pub fn employee_json(id: i64) -> Value {
        json!({
            "id": id,
            "employee_code": format!("E-{:03}", id),
            "first_name": format!("First{}", id),
            "last_name": format!("Last{}", id),
            "full_name": format!("First{} Last{}", id, id),
            "email": format!("employee{}@example.com", id),
            "biometric_user_id": null,
            "department": 1,
            "date_of_joining": "2024-01-15",
            "status": "active"
        })
    }

    pub fn department_json(id: i64, code: &str) -> Value {
        json!({
            "id": id,
            "name": format!("Dept {}", code),
            "code": code,
            "is_active": true
        })
    }
}
