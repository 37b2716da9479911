use std::time::Duration;

/// Sleep on whichever timer the platform provides.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Tracks the latest scheduled call so earlier, superseded ones can bail out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    latest: u64,
}

impl Debounce {
    /// Register a new call and return its ticket.
    pub fn schedule(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// True while no newer call has been scheduled since `ticket`.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut debounce = Debounce::default();
        let first = debounce.schedule();
        assert!(debounce.is_current(first));

        let second = debounce.schedule();
        let third = debounce.schedule();
        assert!(!debounce.is_current(first));
        assert!(!debounce.is_current(second));
        assert!(debounce.is_current(third));
    }

    #[tokio::test]
    async fn test_superseded_call_is_stale_after_sleep() {
        let mut debounce = Debounce::default();
        let typed_r = debounce.schedule();
        let typed_ra = debounce.schedule();
        sleep(Duration::from_millis(5)).await;
        assert!(!debounce.is_current(typed_r));
        assert!(debounce.is_current(typed_ra));
    }
}
