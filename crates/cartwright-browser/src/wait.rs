use crate::{Error, Result};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::time::Duration;
use tokio::time::Instant;

/// Uniform bound applied to every interaction with the storefront UI, the
/// analogue of a session-wide implicit wait. One policy per session; no
/// per-step overrides, no retries beyond the poll loop itself.
#[derive(Debug, Clone, Copy)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub poll: Duration,
}

impl WaitPolicy {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            poll: Duration::from_millis(250),
        }
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(20))
    }
}

/// Poll for an element until it appears or the wait bound elapses.
pub async fn wait_for_element(page: &Page, selector: &str, wait: WaitPolicy) -> Result<Element> {
    let deadline = Instant::now() + wait.timeout;

    loop {
        match page.find_element(selector).await {
            Ok(element) => return Ok(element),
            Err(e) if Instant::now() >= deadline => {
                tracing::debug!("element {:?} not found: {}", selector, e);
                return Err(Error::ElementNotFound {
                    selector: selector.to_string(),
                    waited: wait.timeout,
                });
            }
            Err(_) => tokio::time::sleep(wait.poll).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_session_wait() {
        let wait = WaitPolicy::default();
        assert_eq!(wait.timeout, Duration::from_secs(20));
        assert_eq!(wait.poll, Duration::from_millis(250));
    }

    #[test]
    fn test_custom_timeout_keeps_poll_interval() {
        let wait = WaitPolicy::new(Duration::from_secs(5));
        assert_eq!(wait.timeout, Duration::from_secs(5));
        assert_eq!(wait.poll, Duration::from_millis(250));
    }

    // wait_for_element itself needs a live page; it is exercised by the
    // acceptance scenarios.
}
