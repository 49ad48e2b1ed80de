use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Client entries are swept once the table grows past this size.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

impl Window {
    fn new(now: Instant) -> Self {
        Self { started: now, count: 0 }
    }

    fn roll(&mut self, now: Instant, period: Duration) {
        if now.duration_since(self.started) >= period {
            *self = Window::new(now);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ClientWindows {
    hour: Window,
    day: Window,
}

/// Which ceiling stopped a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitExceeded {
    Hourly,
    Daily,
}

impl LimitExceeded {
    pub fn describe(self) -> &'static str {
        match self {
            LimitExceeded::Hourly => "hourly request limit reached",
            LimitExceeded::Daily => "daily request limit reached",
        }
    }
}

/// Per-client fixed-window counters for an hourly and a daily ceiling.
///
/// - Each client address gets its own hour and day window
/// - A window restarts once its period has elapsed since its first request
/// - A rejected request does not consume quota
pub struct RateLimiter {
    per_hour: u32,
    per_day: u32,
    clients: Mutex<HashMap<String, ClientWindows>>,
}

impl RateLimiter {
    pub fn new(per_hour: u32, per_day: u32) -> Self {
        Self {
            per_hour,
            per_day,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, client: &str) -> Result<(), LimitExceeded> {
        self.check_at(client, Instant::now())
    }

    pub fn check_at(&self, client: &str, now: Instant) -> Result<(), LimitExceeded> {
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());

        if clients.len() > SWEEP_THRESHOLD {
            clients.retain(|_, w| now.duration_since(w.day.started) < DAY);
        }

        let windows = clients.entry(client.to_string()).or_insert(ClientWindows {
            hour: Window::new(now),
            day: Window::new(now),
        });
        windows.hour.roll(now, HOUR);
        windows.day.roll(now, DAY);

        if windows.day.count >= self.per_day {
            return Err(LimitExceeded::Daily);
        }
        if windows.hour.count >= self.per_hour {
            return Err(LimitExceeded::Hourly);
        }
        windows.hour.count += 1;
        windows.day.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_ceiling_blocks_then_resets() {
        let limiter = RateLimiter::new(2, 100);
        let t0 = Instant::now();
        assert!(limiter.check_at("10.0.0.1", t0).is_ok());
        assert!(limiter.check_at("10.0.0.1", t0).is_ok());
        assert_eq!(limiter.check_at("10.0.0.1", t0), Err(LimitExceeded::Hourly));
        assert!(limiter.check_at("10.0.0.1", t0 + HOUR).is_ok());
    }

    #[test]
    fn daily_ceiling_outlasts_hourly_reset() {
        let limiter = RateLimiter::new(2, 3);
        let t0 = Instant::now();
        assert!(limiter.check_at("c", t0).is_ok());
        assert!(limiter.check_at("c", t0).is_ok());
        assert!(limiter.check_at("c", t0 + HOUR).is_ok());
        assert_eq!(limiter.check_at("c", t0 + HOUR * 2), Err(LimitExceeded::Daily));
        assert!(limiter.check_at("c", t0 + DAY).is_ok());
    }

    #[test]
    fn clients_are_counted_separately() {
        let limiter = RateLimiter::new(1, 10);
        let t0 = Instant::now();
        assert!(limiter.check_at("a", t0).is_ok());
        assert!(limiter.check_at("b", t0).is_ok());
        assert!(limiter.check_at("a", t0).is_err());
    }

    #[test]
    fn rejections_do_not_consume_quota() {
        let limiter = RateLimiter::new(1, 2);
        let t0 = Instant::now();
        assert!(limiter.check_at("a", t0).is_ok());
        assert!(limiter.check_at("a", t0).is_err());
        assert!(limiter.check_at("a", t0).is_err());
        // The day window still has one slot left after the hour rolls over.
        assert!(limiter.check_at("a", t0 + HOUR).is_ok());
    }
}
