use leptos::*;

use crate::config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn classes(self) -> &'static str {
        match self {
            Severity::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            Severity::Warning => {
                "bg-status-warning-bg border-status-warning-border text-status-warning-text"
            }
            Severity::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle",
            Severity::Warning => "fas fa-exclamation-triangle",
            Severity::Error => "fas fa-exclamation-circle",
        }
    }
}

/// The single message currently shown by the notification surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    ticket: u64,
}

impl Notification {
    /// Replaces whatever is showing. The returned ticket identifies this
    /// message for its auto-dismiss timer.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.open = true;
        self.message = message.into();
        self.severity = severity;
        self.ticket
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the message only if it is still the one that scheduled the timer.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.open && self.ticket == ticket {
            self.open = false;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<Notification>,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            state: create_rw_signal(Notification::default()),
            timeout_ms,
        }
    }

    pub fn state(&self) -> RwSignal<Notification> {
        self.state
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Success => log::info!("{}", message),
        }
        if let Some(ticket) = self.state.try_update(|n| n.show(message, severity)) {
            self.schedule_dismiss(ticket);
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, Severity::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub fn close(&self) {
        self.state.try_update(Notification::close);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, ticket: u64) {
        let state = self.state;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            state.try_update(|n| n.expire(ticket));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _ticket: u64) {}
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new(config::current().notification_timeout_ms);
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    match use_context::<Notifier>() {
        Some(notifier) => notifier,
        None => provide_notifier(),
    }
}
