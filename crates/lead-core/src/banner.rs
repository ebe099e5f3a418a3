//! Page Error Banner
//!
//! One page-wide error message. A message shown with a time-to-live carries
//! a deadline; only an expiry at or past that deadline clears it, so a stale
//! timer can never wipe a newer message.

/// How long a failed-delete message stays visible
pub const DELETE_ERROR_TTL_MS: u64 = 4_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
    deadline: Option<u64>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Show a message until something else replaces or clears it.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.deadline = None;
    }

    /// Show a message that expires `ttl_ms` after `now_ms`. Returns the deadline.
    pub fn show_for(&mut self, message: impl Into<String>, now_ms: u64, ttl_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(ttl_ms);
        self.message = Some(message.into());
        self.deadline = Some(deadline);
        deadline
    }

    /// Clear the message if its deadline has passed. Returns whether it cleared.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_message_lifecycle() {
        let mut banner = ErrorBanner::new();
        let deadline = banner.show_for("Could not delete", 1_000, DELETE_ERROR_TTL_MS);
        assert_eq!(deadline, 5_000);
        assert_eq!(banner.message(), Some("Could not delete"));

        assert!(!banner.expire(4_999));
        assert_eq!(banner.message(), Some("Could not delete"));

        assert!(banner.expire(5_000));
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn test_new_failure_extends_visibility() {
        let mut banner = ErrorBanner::new();
        banner.show_for("first", 0, DELETE_ERROR_TTL_MS);
        banner.show_for("second", 3_000, DELETE_ERROR_TTL_MS);

        // the first failure's timer would fire here
        assert!(!banner.expire(4_000));
        assert_eq!(banner.message(), Some("second"));

        assert!(banner.expire(7_000));
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn test_untimed_message_survives_expiry() {
        let mut banner = ErrorBanner::new();
        banner.show_for("delete failed", 0, DELETE_ERROR_TTL_MS);
        banner.show("Email already exists");
        assert!(!banner.expire(10_000));
        assert_eq!(banner.message(), Some("Email already exists"));
    }

    #[test]
    fn test_clear() {
        let mut banner = ErrorBanner::new();
        banner.show_for("x", 0, 10);
        banner.clear();
        assert_eq!(banner.message(), None);
        assert_eq!(banner.deadline(), None);
    }
}
