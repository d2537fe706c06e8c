use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Effect, Timer};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Info => "ℹ",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#8ec63f",
            Severity::Error => "#dc3545",
            Severity::Info => "#0760ad",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    /// Exit transition running; removal is scheduled.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: u64,
    pub phase: NotificationPhase,
}

/// Anything that can surface a transient message to the user.
pub trait NotificationSink {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Holds the single visible notification and the timer effects its
/// lifecycle needs.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCenter {
    active: Option<Notification>,
    next_id: NotificationId,
    clock_ms: u64,
    display: Duration,
    exit: Duration,
    outbox: Vec<Effect>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000), Duration::from_millis(400))
    }
}

impl NotificationCenter {
    pub fn new(display: Duration, exit: Duration) -> Self {
        Self {
            active: None,
            next_id: 1,
            clock_ms: 0,
            display,
            exit,
            outbox: Vec::new(),
        }
    }

    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref()
    }

    pub(crate) fn set_clock(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
    }

    /// Display time elapsed: start the exit transition.
    pub(crate) fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.active.as_mut() {
            Some(current) if current.id == id && current.phase == NotificationPhase::Visible => {
                current.phase = NotificationPhase::Leaving;
                self.outbox.push(Effect::StartTimer {
                    timer: Timer::NotificationRemove(id),
                    after: self.exit,
                });
                true
            }
            _ => false,
        }
    }

    pub(crate) fn remove(&mut self, id: NotificationId) -> bool {
        if self.active.as_ref().is_some_and(|current| current.id == id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&mut self, message: &str, severity: Severity) {
        if let Some(evicted) = self.active.take() {
            self.outbox.push(Effect::CancelTimer {
                timer: Timer::NotificationExit(evicted.id),
            });
            self.outbox.push(Effect::CancelTimer {
                timer: Timer::NotificationRemove(evicted.id),
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.active = Some(Notification {
            id,
            message: message.to_string(),
            severity,
            created_at_ms: self.clock_ms,
            phase: NotificationPhase::Visible,
        });
        self.outbox.push(Effect::StartTimer {
            timer: Timer::NotificationExit(id),
            after: self.display,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_notification_evicts_first_and_cancels_its_timers() {
        let mut center = NotificationCenter::default();
        center.notify("first", Severity::Info);
        center.notify("second", Severity::Error);

        let active = center.active().unwrap();
        assert_eq!(active.message, "second");
        assert_eq!(active.severity, Severity::Error);

        let effects = center.drain_effects();
        assert!(effects.contains(&Effect::CancelTimer {
            timer: Timer::NotificationExit(1)
        }));
        assert!(effects.contains(&Effect::StartTimer {
            timer: Timer::NotificationExit(2),
            after: Duration::from_millis(5000),
        }));
    }

    #[test]
    fn stale_exit_is_ignored() {
        let mut center = NotificationCenter::default();
        center.notify("first", Severity::Info);
        center.notify("second", Severity::Info);
        let _ = center.drain_effects();

        assert!(!center.begin_exit(1));
        assert!(center.drain_effects().is_empty());
        assert!(!center.remove(1));
        assert_eq!(center.active().unwrap().phase, NotificationPhase::Visible);
    }

    #[test]
    fn severity_styles() {
        assert_eq!(Severity::Success.icon(), "✓");
        assert_eq!(Severity::Error.color(), "#dc3545");
        assert_eq!(Severity::Info.icon(), "ℹ");
        assert_eq!(Severity::default(), Severity::Info);
    }
}
