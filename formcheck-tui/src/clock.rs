use std::time::Duration;

/// How often the clock refreshes.
pub const CLOCK_PERIOD: Duration = Duration::from_millis(1000);

/// Live clock showing the current time in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    millis: i64,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            millis: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn tick(&mut self) {
        self.millis = chrono::Utc::now().timestamp_millis();
    }

    pub fn millis(&self) -> i64 {
        self.millis
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
