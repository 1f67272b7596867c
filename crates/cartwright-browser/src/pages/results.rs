use crate::{Error, Result, WaitPolicy, wait_for_element};
use cartwright_core::{CandidateProduct, pair_candidates, parse_display_price};
use chromiumoxide::page::Page;

const RESULTS_CONTAINER: &str = "div.s-main-slot";
const RESULT_LINKS: &str = "div.sg-row a.a-link-normal.a-text-normal";
const RESULT_PRICES: &str = "div.sg-row span.a-price-whole";
const PRICE_MIN_INPUT: &str = "input#low-price";
const PRICE_MAX_INPUT: &str = "input#high-price";
const PRICE_FILTER_GO: &str = "input.a-button-input[type='submit']";

/// The search-results view: candidate listing, activation, and the
/// price-range filter controls.
pub struct SearchResultsPage {
    page: Page,
    wait: WaitPolicy,
}

impl SearchResultsPage {
    pub fn new(page: Page, wait: WaitPolicy) -> Self {
        Self { page, wait }
    }

    /// Fail unless the results container has rendered.
    pub async fn assert_displayed(&self) -> Result<()> {
        wait_for_element(&self.page, RESULTS_CONTAINER, self.wait).await?;
        Ok(())
    }

    /// Snapshot the first results page as an ordered candidate list.
    ///
    /// Names and prices come off the page as two index-aligned element
    /// lists; they are merged into pairs here so nothing downstream ever
    /// sees parallel sequences. An empty page yields an empty list, which
    /// the selector turns into its not-found error.
    pub async fn candidates(&self) -> Result<Vec<CandidateProduct>> {
        self.assert_displayed().await?;

        let names = self.texts_of(RESULT_LINKS).await?;
        let price_texts = self.texts_of(RESULT_PRICES).await?;
        tracing::debug!(
            names = names.len(),
            prices = price_texts.len(),
            "collected candidate columns"
        );

        Ok(pair_candidates(names, price_texts)?)
    }

    /// Activate the candidate at the given position. The storefront opens
    /// product links in a new tab.
    pub async fn open_candidate(&self, position: usize) -> Result<()> {
        let links = self.page.find_elements(RESULT_LINKS).await?;
        let link = links.get(position).ok_or_else(|| {
            Error::Browser(format!(
                "result link {} is gone; only {} links on the page",
                position,
                links.len()
            ))
        })?;
        link.click().await?;
        Ok(())
    }

    /// Apply the results-page price filter.
    pub async fn filter_by_price(&self, min: &str, max: &str) -> Result<()> {
        let min_input = wait_for_element(&self.page, PRICE_MIN_INPUT, self.wait).await?;
        min_input.click().await?;
        min_input.type_str(min).await?;

        let max_input = wait_for_element(&self.page, PRICE_MAX_INPUT, self.wait).await?;
        max_input.click().await?;
        max_input.type_str(max).await?;

        let go = wait_for_element(&self.page, PRICE_FILTER_GO, self.wait).await?;
        go.click().await?;
        self.page.wait_for_navigation().await?;

        tracing::info!("filtered results to price range {}..{}", min, max);
        Ok(())
    }

    /// All prices currently displayed, in on-screen order.
    pub async fn displayed_prices(&self) -> Result<Vec<u64>> {
        self.assert_displayed().await?;

        self.texts_of(RESULT_PRICES)
            .await?
            .iter()
            .map(|text| parse_display_price(text).map_err(Error::from))
            .collect()
    }

    async fn texts_of(&self, selector: &str) -> Result<Vec<String>> {
        let elements = self.page.find_elements(selector).await?;
        let mut texts = Vec::with_capacity(elements.len());
        for element in &elements {
            texts.push(element.inner_text().await?.unwrap_or_default());
        }
        Ok(texts)
    }
}
