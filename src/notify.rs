// src/notify.rs
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Danger => "exclamation-triangle",
            Severity::Warning => "info-circle",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Danger => "alert-danger",
            Severity::Warning => "alert-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
    pub issued_at: DateTime<Utc>,
    expires_at: Instant,
}

/// Transient banner slot. Holds at most one banner; a new one replaces the
/// old, and each disappears on its own once its time is up.
#[derive(Debug, Clone)]
pub struct NotificationSurface {
    ttl: Duration,
    current: Option<Notification>,
}

impl NotificationSurface {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn show(&mut self, severity: Severity, message: impl Into<String>) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
            issued_at: Utc::now(),
            expires_at: Instant::now() + self.ttl,
        };
        let id = notification.id;
        self.current = Some(notification);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.show(Severity::Success, message)
    }

    pub fn danger(&mut self, message: impl Into<String>) -> Uuid {
        self.show(Severity::Danger, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Uuid {
        self.show(Severity::Warning, message)
    }

    /// The banner still on screen, if any.
    pub fn current(&mut self) -> Option<&Notification> {
        if self
            .current
            .as_ref()
            .is_some_and(|n| Instant::now() >= n.expires_at)
        {
            self.current = None;
        }
        self.current.as_ref()
    }

    /// Close a banner by id. Closing one that was already replaced does nothing.
    pub fn dismiss(&mut self, id: Uuid) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn banner_expires_after_ttl() {
        let mut surface = NotificationSurface::new(Duration::from_secs(5));
        surface.success("Sample resume loaded successfully!");

        tokio::time::advance(Duration::from_millis(4_900)).await;
        assert!(surface.current().is_some());

        tokio::time::advance(Duration::from_millis(200)).await;
        assert!(surface.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_banner_replaces_older() {
        let mut surface = NotificationSurface::new(Duration::from_secs(5));
        surface.success("first");
        surface.danger("second");

        let shown = surface.current().unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.severity, Severity::Danger);
    }

    #[tokio::test(start_paused = true)]
    async fn each_banner_gets_its_own_lifetime() {
        let mut surface = NotificationSurface::new(Duration::from_secs(5));
        surface.success("first");
        tokio::time::advance(Duration::from_secs(4)).await;
        surface.warning("second");
        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(surface.current().unwrap().message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn dismissing_a_replaced_banner_is_a_no_op() {
        let mut surface = NotificationSurface::new(Duration::from_secs(5));
        let old = surface.success("first");
        surface.warning("second");
        surface.dismiss(old);
        assert_eq!(surface.current().unwrap().message, "second");
    }

    #[test]
    fn severities_map_to_distinct_icons() {
        let icons = [
            Severity::Success.icon(),
            Severity::Danger.icon(),
            Severity::Warning.icon(),
        ];
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
        assert_ne!(icons[0], icons[2]);
    }
}
