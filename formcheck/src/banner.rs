use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Default delay before a success banner is removed.
pub const DEFAULT_BANNER_DELAY: Duration = Duration::from_millis(1000);

/// Default text of the success banner.
pub const DEFAULT_BANNER_MESSAGE: &str = "✓ Message sent successfully! We'll get back to you soon.";

/// Unique identifier for a success banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(usize);

impl BannerId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for BannerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__banner_{}", self.0)
    }
}

/// Transient confirmation shown after a successful submit.
///
/// The banner is announced politely to assistive technology and can be found
/// on the page through its marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessBanner {
    pub id: BannerId,
    /// Marker attribute used to discover the banner.
    pub marker: String,
    pub message: String,
    pub class: &'static str,
    pub role: &'static str,
    pub aria_live: &'static str,
}

impl SuccessBanner {
    /// Create a banner with a fresh identifier.
    pub fn new(marker: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: BannerId::new(),
            marker: marker.into(),
            message: message.into(),
            class: "success-message",
            role: "status",
            aria_live: "polite",
        }
    }
}

/// A banner waiting to be removed.
///
/// The removal only ever applies to the banner it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRemoval {
    pub banner: BannerId,
    pub due: Instant,
}

impl PendingRemoval {
    pub fn new(banner: BannerId, now: Instant, delay: Duration) -> Self {
        Self {
            banner,
            due: now + delay,
        }
    }

    /// Check if the removal should run at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}
