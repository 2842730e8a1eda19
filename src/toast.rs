//! Transient status messages.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant, lifetime: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: now + lifetime,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holds at most one toast; a new one replaces the old.
#[derive(Debug, Clone)]
pub struct Toasts {
    current: Option<Toast>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast::new(message, now, self.lifetime));
    }

    /// Drop the toast once expired. Returns whether one was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires() {
        let now = Instant::now();
        let mut toasts = Toasts::new(Duration::from_millis(2000));
        toasts.show("Link copied!", now);
        assert!(!toasts.prune(now + Duration::from_millis(1999)));
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("Link copied!"));
        assert!(toasts.prune(now + Duration::from_millis(2000)));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_old() {
        let now = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(2));
        toasts.show("first", now);
        toasts.show("second", now + Duration::from_secs(1));
        assert!(!toasts.prune(now + Duration::from_millis(2500)));
        assert_eq!(toasts.current().unwrap().message, "second");
    }
}
