use std::time::Duration;
use tokio::time::sleep;

/// Spaces out consecutive requests to the fantasy API.
/// The first request goes out immediately.
pub struct RateLimiter {
    delay: Duration,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        }
    }

    pub async fn wait(&mut self) {
        if self.should_wait() {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }

    pub fn requests_made(&self) -> usize {
        self.request_count
    }

    fn should_wait(&self) -> bool {
        self.request_count > 0 && !self.delay.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_first_request_is_not_delayed() {
        let mut limiter = RateLimiter::new(10_000);

        let start = Instant::now();
        limiter.wait().await;

        assert!(start.elapsed() < Duration::from_secs(5));
        assert_eq!(limiter.requests_made(), 1);
    }

    #[tokio::test]
    async fn test_later_requests_are_spaced() {
        let mut limiter = RateLimiter::new(20);

        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;

        assert!(start.elapsed() >= Duration::from_millis(40));
        assert_eq!(limiter.requests_made(), 3);
    }
}
