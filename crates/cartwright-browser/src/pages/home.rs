use crate::{Error, Result, WaitPolicy, wait_for_element};
use chromiumoxide::page::Page;

// The search bar lives in the site header, which persists across the home
// and results views, so this object is valid on both.
const SEARCH_BOX: &str = "input#twotabsearchtextbox";
const SEARCH_SUBMIT: &str = "input#nav-search-submit-button";

/// The storefront landing view and its persistent search header.
pub struct HomePage {
    page: Page,
    wait: WaitPolicy,
}

impl HomePage {
    pub fn new(page: Page, wait: WaitPolicy) -> Self {
        Self { page, wait }
    }

    pub async fn title(&self) -> Result<String> {
        Ok(self.page.get_title().await?.unwrap_or_default())
    }

    /// Fail unless the page title carries the expected storefront marker.
    pub async fn validate_title_contains(&self, expected: &str) -> Result<()> {
        let title = self.title().await?;
        if title.contains(expected) {
            Ok(())
        } else {
            Err(Error::Browser(format!(
                "page title {:?} does not contain {:?}",
                title, expected
            )))
        }
    }

    /// Type a query into the search bar and submit it.
    pub async fn search(&self, query: &str) -> Result<()> {
        let search_box = wait_for_element(&self.page, SEARCH_BOX, self.wait).await?;
        search_box.click().await?;
        // A previous query may still be in the box; typing would append to it.
        self.page
            .evaluate(format!("document.querySelector('{}').value = ''", SEARCH_BOX))
            .await?;
        search_box.type_str(query).await?;

        let submit = wait_for_element(&self.page, SEARCH_SUBMIT, self.wait).await?;
        submit.click().await?;
        self.page.wait_for_navigation().await?;

        tracing::info!("searched for {:?}", query);
        Ok(())
    }
}
