//! Reporting the outcome of an admin action.
//!
//! Every action ends in one call here, which writes the activity log entry
//! and shows the toast. An [`ApiError::Unauthorized`] also signs the admin out.

use std::time::Duration;

use api::forms::FormError;
use api::ApiError;
use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, ActivityLog, LogLevel};
use crate::auth::{sign_out, use_auth, AuthState};
use crate::components::{use_toast, ToastOptions, Toasts};

#[derive(Clone, Copy, PartialEq)]
pub struct Feedback {
    toast: Toasts,
    log: Signal<ActivityLog>,
    auth: Signal<AuthState>,
}

pub fn use_feedback() -> Feedback {
    Feedback {
        toast: use_toast(),
        log: use_activity_log(),
        auth: use_auth(),
    }
}

impl Feedback {
    pub fn success(&self, message: &str) {
        self.success_for(message, None);
    }

    pub fn success_for(&self, message: &str, duration: Option<Duration>) {
        tracing::info!("{message}");
        self.record(LogLevel::Success, message);
        let options = match duration {
            Some(duration) => ToastOptions::new().duration(duration),
            None => ToastOptions::new(),
        };
        self.toast.success(message.to_string(), options);
    }

    /// A form was submitted with missing or invalid fields.
    pub fn invalid(&self, err: &FormError) {
        self.record(LogLevel::Warning, &err.to_string());
        self.toast.error(err.to_string(), ToastOptions::new());
    }

    /// Report a failed request; `fallback` is shown unless the server sent
    /// its own message.
    pub fn failure(&self, err: &ApiError, fallback: &str) {
        tracing::error!("{fallback}: {err}");
        self.record(LogLevel::Error, &format!("{fallback}: {err}"));
        self.toast.error(err.user_message(fallback), ToastOptions::new());
        if err.is_unauthorized() {
            spawn(sign_out(self.auth));
        }
    }

    /// Like [`Feedback::failure`] for background loads: logged, and the
    /// session dropped on 401, but no toast.
    pub fn quiet_failure(&self, err: &ApiError, context: &str) {
        tracing::warn!("{context}: {err}");
        self.record(LogLevel::Warning, &format!("{context}: {err}"));
        if err.is_unauthorized() {
            spawn(sign_out(self.auth));
        }
    }

    fn record(&self, level: LogLevel, message: &str) {
        let mut log = self.log;
        log.write().push(level, message);
    }
}
