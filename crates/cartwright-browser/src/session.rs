use crate::{BrowserProfile, ChromeFinder, ChromeLauncher, Error, Result, WaitPolicy};
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use std::fmt;
use std::path::PathBuf;
use std::process::Child;
use tokio::task::JoinHandle;
use tokio::time::Instant;

const CONNECT_RETRIES: u32 = 5;

/// How a scenario's browser session is launched.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub chrome_path: Option<PathBuf>,
    /// Named persistent profile; `None` uses an ephemeral one.
    pub profile: Option<String>,
    pub headless: bool,
    pub debugging_port: u16,
    pub wait: WaitPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            chrome_path: None,
            profile: None,
            headless: true,
            debugging_port: 9222,
            wait: WaitPolicy::default(),
        }
    }
}

/// One scenario's browser: a Chrome child process, the CDP connection to it,
/// and the tab set the workflow is allowed to touch.
///
/// Tab discipline is stack-like: the results tab is the anchor, at most one
/// detail tab is open at a time, and it is closed (focus restored) before
/// the next product request begins.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    chrome: Child,
    // Held for its Drop: ephemeral profile dirs are removed on teardown.
    _profile: BrowserProfile,
    original: Page,
    detail: Option<Page>,
    wait: WaitPolicy,
}

impl BrowserSession {
    /// Find Chrome, launch it against a managed profile, and attach over CDP.
    pub async fn launch(options: SessionOptions) -> Result<Self> {
        let chrome_binary = ChromeFinder::new(options.chrome_path.clone()).find()?;
        tracing::info!("using Chrome at {}", chrome_binary.display());

        let profile = match &options.profile {
            Some(name) => BrowserProfile::named(name)?,
            None => BrowserProfile::ephemeral()?,
        };

        let launcher = ChromeLauncher::new(
            chrome_binary,
            profile.path().to_path_buf(),
            options.headless,
            options.debugging_port,
        );
        let chrome = launcher.launch()?;

        // Chrome may not accept CDP connections immediately after spawn.
        let ws_url = format!("http://localhost:{}", launcher.debugging_port());
        let (browser, mut handler) = {
            let mut retries = CONNECT_RETRIES;
            loop {
                tracing::debug!("attempting CDP connection to {}...", ws_url);
                match Browser::connect(&ws_url).await {
                    Ok(result) => {
                        tracing::info!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        retries -= 1;
                        if retries == 0 {
                            return Err(Error::Cdp(format!(
                                "Failed to connect to Chrome after {} attempts: {}",
                                CONNECT_RETRIES, e
                            )));
                        }
                        tracing::info!("CDP connection attempt failed, retrying... ({} left)", retries);
                        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                    }
                }
            }
        };

        // The handler task must run for any browser/page command to resolve.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Wait briefly for Chrome to create its initial tab.
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        let original = if let Some(page) = browser.pages().await?.first() {
            page.clone()
        } else {
            browser.new_page("about:blank").await?
        };

        Ok(Self {
            browser,
            handler_task,
            chrome,
            _profile: profile,
            original,
            detail: None,
            wait: options.wait,
        })
    }

    pub fn wait(&self) -> WaitPolicy {
        self.wait
    }

    /// The results/anchor tab.
    pub fn results_page(&self) -> Page {
        self.original.clone()
    }

    /// The tab the next interaction should target: the detail tab while one
    /// is open, otherwise the results tab.
    pub fn current_page(&self) -> Page {
        self.detail.clone().unwrap_or_else(|| self.original.clone())
    }

    /// Navigate the results tab and wait for the load to settle.
    pub async fn goto(&self, url: &str) -> Result<()> {
        tracing::info!("navigating to {}", url);
        self.original.goto(url).await?;
        self.original.wait_for_navigation().await?;
        Ok(())
    }

    /// Wait for the tab opened by activating a candidate and focus it.
    ///
    /// Only one detail tab may be open at a time; asking for a second is a
    /// workflow bug, not a browser condition.
    pub async fn switch_to_detail(&mut self) -> Result<Page> {
        if self.detail.is_some() {
            return Err(Error::Browser(
                "a detail tab is already open; close it before opening another".to_string(),
            ));
        }

        let deadline = Instant::now() + self.wait.timeout;
        loop {
            let pages = self.browser.pages().await?;
            if let Some(page) = pages
                .iter()
                .find(|p| p.target_id() != self.original.target_id())
            {
                page.bring_to_front().await?;
                self.detail = Some(page.clone());
                tracing::debug!("switched to detail tab");
                return Ok(page.clone());
            }

            if Instant::now() >= deadline {
                return Err(Error::Browser(format!(
                    "no new tab appeared within {:?}",
                    self.wait.timeout
                )));
            }
            tokio::time::sleep(self.wait.poll).await;
        }
    }

    /// Close the detail tab and restore focus to the results tab.
    pub async fn close_detail_and_return(&mut self) -> Result<()> {
        let detail = self.detail.take().ok_or_else(|| {
            Error::Browser("no detail tab is open".to_string())
        })?;

        detail.close().await?;
        self.original.bring_to_front().await?;
        tracing::debug!("detail tab closed, focus restored to results tab");
        Ok(())
    }

    /// PNG of whatever tab currently has focus, for failure evidence.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        let bytes = self
            .current_page()
            .screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .full_page(true)
                    .build(),
            )
            .await?;
        Ok(bytes)
    }

    /// Tear the session down: close any stray detail tab, stop the CDP
    /// handler, and kill the Chrome child. Errors here are logged, not
    /// surfaced; teardown runs on both pass and fail paths.
    pub async fn shutdown(mut self) {
        if let Some(detail) = self.detail.take() {
            if let Err(e) = detail.close().await {
                tracing::debug!("closing leftover detail tab failed: {}", e);
            }
        }

        self.handler_task.abort();

        if let Err(e) = self.chrome.kill() {
            tracing::debug!("killing Chrome failed (may have exited): {}", e);
        }
        let _ = self.chrome.wait();
        tracing::info!("browser session closed");
    }
}

impl fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserSession")
            .field("detail_open", &self.detail.is_some())
            .field("wait", &self.wait)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_headless_ephemeral() {
        let options = SessionOptions::default();
        assert!(options.headless);
        assert!(options.profile.is_none());
        assert!(options.chrome_path.is_none());
        assert_eq!(options.debugging_port, 9222);
    }

    // Session launch and tab management need a real Chrome; they are
    // exercised by the acceptance scenarios.
}
