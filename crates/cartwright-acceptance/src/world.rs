use crate::config::HarnessConfig;
use cartwright_browser::BrowserSession;
use cartwright_browser::pages::{HomePage, SearchResultsPage};
use cartwright_core::CartAddition;

/// Per-scenario context: the browser session plus the bookkeeping the
/// closing assertions need. Built fresh for every scenario; the after-hook
/// tears the session down on both pass and fail paths.
#[derive(Debug, cucumber::World)]
#[world(init = Self::new)]
pub struct ShopWorld {
    pub session: Option<BrowserSession>,
    /// Rows taken from the data table, counted before processing starts.
    pub requested: usize,
    /// Adds that completed with a visible confirmation.
    pub cart_additions: Vec<CartAddition>,
}

impl ShopWorld {
    fn new() -> Self {
        Self {
            session: None,
            requested: 0,
            cart_additions: Vec::new(),
        }
    }

    pub async fn start_session(&mut self, config: &HarnessConfig) {
        let session = BrowserSession::launch(config.session_options())
            .await
            .unwrap_or_else(|e| panic!("failed to launch browser session: {e}"));
        self.session = Some(session);
    }

    pub fn session(&self) -> &BrowserSession {
        self.session.as_ref().expect("browser session not started")
    }

    pub fn session_mut(&mut self) -> &mut BrowserSession {
        self.session.as_mut().expect("browser session not started")
    }

    /// Home page object over the results tab (the search header persists
    /// across the home and results views).
    pub fn home_page(&self) -> HomePage {
        HomePage::new(self.session().results_page(), self.session().wait())
    }

    pub fn results_page(&self) -> SearchResultsPage {
        SearchResultsPage::new(self.session().results_page(), self.session().wait())
    }

    /// Require a confirmed addition for every requested row.
    ///
    /// A shortfall fails the scenario; additions recorded before the failing
    /// row stay recorded, since there is no rollback in the workflow.
    pub fn assert_cart_complete(&self) {
        assert_eq!(
            self.cart_additions.len(),
            self.requested,
            "only {} of {} requested products were confirmed in the cart: {:?}",
            self.cart_additions.len(),
            self.requested,
            self.cart_additions
        );
    }

    /// Best-effort failure evidence; never fails the teardown itself.
    pub async fn capture_failure_screenshot(&self, scenario_name: &str) {
        let Some(session) = &self.session else {
            return;
        };

        let dir = &HarnessConfig::global().screenshot_dir;
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!("cannot create screenshot dir {}: {}", dir.display(), e);
            return;
        }

        let file = dir.join(format!(
            "{}-{}.png",
            chrono::Local::now().format("%Y%m%d-%H%M%S"),
            sanitize(scenario_name)
        ));

        match session.screenshot().await {
            Ok(bytes) => match std::fs::write(&file, bytes) {
                Ok(()) => tracing::error!("failure screenshot written to {}", file.display()),
                Err(e) => tracing::warn!("cannot write screenshot {}: {}", file.display(), e),
            },
            Err(e) => tracing::warn!("screenshot capture failed: {}", e),
        }
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}
