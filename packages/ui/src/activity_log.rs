//! In-memory record of what the admin did this session.
//!
//! [`crate::Feedback`] appends to it; the navbar toggle and the floating panel
//! read it. Only the most recent [`MAX_ENTRIES`] actions are kept.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use dioxus::prelude::*;

pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn class(self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn time(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    visible: bool,
    failures_only: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            level,
            message: message.to_string(),
        });
    }

    /// Newest first, honouring the failures-only filter.
    pub fn recent(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !self.failures_only || e.level.is_failure())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.level.is_failure()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn failures_only(&self) -> bool {
        self.failures_only
    }

    pub fn set_failures_only(&mut self, on: bool) {
        self.failures_only = on;
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_level_and_message() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "Approved Ravi");
        log.push(LogLevel::Info, "Refreshed");
        assert_eq!(log.len(), 2);
        let recent = log.recent();
        assert_eq!(recent[0].message, "Refreshed");
        assert_eq!(recent[1].message, "Approved Ravi");
        assert_eq!(recent[0].time().len(), 8);
        assert!(!log.has_errors());
        log.push(LogLevel::Error, "Failed to block user");
        assert!(log.has_errors());
    }

    #[test]
    fn test_oldest_entries_are_dropped_at_capacity() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(LogLevel::Info, &format!("event {i}"));
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        let recent = log.recent();
        assert_eq!(recent[0].message, format!("event {}", MAX_ENTRIES + 4));
        assert_eq!(recent[MAX_ENTRIES - 1].message, "event 5");
    }

    #[test]
    fn test_failures_only_filter() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "Report updated successfully");
        log.push(LogLevel::Warning, "Error fetching reports: timeout");
        log.push(LogLevel::Error, "Failed to send reply: 500");
        assert_eq!(log.failure_count(), 2);

        log.set_failures_only(true);
        let messages: Vec<String> = log.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec!["Failed to send reply: 500", "Error fetching reports: timeout"]
        );

        log.clear();
        assert!(log.is_empty());
        assert!(log.failures_only());
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let mut log = ActivityLog::default();
        assert!(!log.is_visible());
        log.toggle();
        assert!(log.is_visible());
        log.set_visible(false);
        assert!(!log.is_visible());
    }
}
