use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::api::PunchType;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_BIOMETRIC_TEST_USER_ID: &str = "12345";
pub const DEFAULT_BIOMETRIC_TEST_DEVICE_ID: &str = "TEST-DEVICE";
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 4_000;

/// HTTP verb used when saving the edit dialog. `Patch` sends only the
/// dialog fields; `Put` replaces the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMethod {
    Put,
    #[default]
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub biometric_test_user_id: String,
    pub biometric_test_device_id: String,
    pub biometric_punch_type: PunchType,
    pub notification_timeout_ms: u32,
    pub update_method: UpdateMethod,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            biometric_test_user_id: DEFAULT_BIOMETRIC_TEST_USER_ID.to_string(),
            biometric_test_device_id: DEFAULT_BIOMETRIC_TEST_DEVICE_ID.to_string(),
            biometric_punch_type: PunchType::In,
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            update_method: UpdateMethod::Patch,
        }
    }
}

/// Sparse overlay read from `config.json` or from window globals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub biometric_test_user_id: Option<String>,
    pub biometric_test_device_id: Option<String>,
    pub biometric_punch_type: Option<PunchType>,
    pub notification_timeout_ms: Option<u32>,
    pub update_method: Option<UpdateMethod>,
}

impl ConfigOverrides {
    fn non_blank(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }

    pub fn apply_to(self, config: &mut RuntimeConfig) {
        if let Some(url) = Self::non_blank(self.api_base_url) {
            config.api_base_url = normalize_base_url(&url);
        }
        if let Some(user_id) = Self::non_blank(self.biometric_test_user_id) {
            config.biometric_test_user_id = user_id;
        }
        if let Some(device_id) = Self::non_blank(self.biometric_test_device_id) {
            config.biometric_test_device_id = device_id;
        }
        if let Some(punch_type) = self.biometric_punch_type {
            config.biometric_punch_type = punch_type;
        }
        if let Some(timeout) = self.notification_timeout_ms.filter(|ms| *ms > 0) {
            config.notification_timeout_ms = timeout;
        }
        if let Some(method) = self.update_method {
            config.update_method = method;
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Builds the effective config. Later layers win.
pub fn resolve(layers: impl IntoIterator<Item = ConfigOverrides>) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    for layer in layers {
        layer.apply_to(&mut config);
    }
    config
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::ConfigOverrides;
    use wasm_bindgen::JsValue;

    fn global_object(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            None
        } else {
            Some(any)
        }
    }

    fn string_field(obj: &JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    /// `window.__ATTENDANCE_ENV = { API_BASE_URL: "..." }` written by env.js.
    pub fn from_env_js() -> Option<ConfigOverrides> {
        let obj = global_object("__ATTENDANCE_ENV")?;
        Some(ConfigOverrides {
            api_base_url: string_field(&obj, &["API_BASE_URL", "api_base_url"]),
            ..Default::default()
        })
    }

    /// `window.__ATTENDANCE_CONFIG = { api_base_url: "...", ... }`.
    pub fn from_window_config() -> Option<ConfigOverrides> {
        let obj = global_object("__ATTENDANCE_CONFIG")?;
        Some(ConfigOverrides {
            api_base_url: string_field(&obj, &["api_base_url", "API_BASE_URL"]),
            biometric_test_user_id: string_field(&obj, &["biometric_test_user_id"]),
            biometric_test_device_id: string_field(&obj, &["biometric_test_device_id"]),
            ..Default::default()
        })
    }

    pub fn config_json_url() -> Option<String> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(format!("{}/config.json", origin))
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_json() -> Option<ConfigOverrides> {
    let url = globals::config_json_url()?;
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("no config.json served ({})", resp.status());
        return None;
    }
    match resp.json::<ConfigOverrides>().await {
        Ok(overrides) => Some(overrides),
        Err(err) => {
            log::warn!("ignoring malformed config.json: {}", err);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn collect_layers() -> Vec<ConfigOverrides> {
    let mut layers = Vec::new();
    layers.extend(fetch_config_json().await);
    layers.extend(globals::from_window_config());
    layers.extend(globals::from_env_js());
    layers
}

#[cfg(not(target_arch = "wasm32"))]
async fn collect_layers() -> Vec<ConfigOverrides> {
    Vec::new()
}

/// Resolves the runtime config once; later calls return the cached value.
pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = resolve(collect_layers().await);
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

/// Current config; defaults until `init` has finished.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub fn api_base_url() -> String {
    current().api_base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = RuntimeConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.biometric_test_user_id, "12345");
        assert_eq!(config.biometric_test_device_id, "TEST-DEVICE");
        assert_eq!(config.notification_timeout_ms, 4_000);
        assert_eq!(config.update_method, UpdateMethod::Patch);
    }

    #[test]
    fn later_layers_take_precedence_and_blanks_are_ignored() {
        let file = ConfigOverrides {
            api_base_url: Some("http://file.example/api/".into()),
            biometric_test_user_id: Some("777".into()),
            ..Default::default()
        };
        let env = ConfigOverrides {
            api_base_url: Some("https://env.example/api//".into()),
            biometric_test_user_id: Some("   ".into()),
            notification_timeout_ms: Some(0),
            ..Default::default()
        };
        let config = resolve([file, env]);
        assert_eq!(config.api_base_url, "https://env.example/api");
        assert_eq!(config.biometric_test_user_id, "777");
        assert_eq!(config.notification_timeout_ms, 4_000);
    }

    #[test]
    fn overrides_deserialize_from_partial_json() {
        let raw = serde_json::json!({
            "api_base_url": "http://10.0.0.5:8000/api",
            "update_method": "put",
            "biometric_punch_type": "OUT"
        });
        let overrides: ConfigOverrides = serde_json::from_value(raw).unwrap();
        let config = resolve([overrides]);
        assert_eq!(config.api_base_url, "http://10.0.0.5:8000/api");
        assert_eq!(config.update_method, UpdateMethod::Put);
        assert_eq!(config.biometric_punch_type, PunchType::Out);
        assert_eq!(config.biometric_test_device_id, "TEST-DEVICE");
    }

    #[test]
    fn current_falls_back_to_defaults_before_init() {
        if RUNTIME_CONFIG.get().is_none() {
            assert_eq!(current(), RuntimeConfig::default());
        }
    }
}
