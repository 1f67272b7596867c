use crate::{Error, Result, WaitPolicy, wait_for_element};
use chromiumoxide::page::Page;

const PRODUCT_TITLE: &str = "span#productTitle";
const QUANTITY_SELECT: &str = "select#quantity";
const ADD_TO_CART_BUTTON: &str = "input#add-to-cart-button";
const CONFIRMATION_MESSAGE: &str = "#huc-v2-order-row-confirm-text";

/// The product-detail view opened in its own tab: quantity control,
/// add-to-cart action, and the added-to-cart confirmation signal.
pub struct ProductDetailPage {
    page: Page,
    wait: WaitPolicy,
}

impl ProductDetailPage {
    pub fn new(page: Page, wait: WaitPolicy) -> Self {
        Self { page, wait }
    }

    /// Fail unless the product title has rendered.
    pub async fn assert_displayed(&self) -> Result<()> {
        wait_for_element(&self.page, PRODUCT_TITLE, self.wait).await?;
        Ok(())
    }

    pub async fn product_title(&self) -> Result<String> {
        let title = wait_for_element(&self.page, PRODUCT_TITLE, self.wait).await?;
        Ok(title.inner_text().await?.unwrap_or_default().trim().to_string())
    }

    /// Set the quantity control to the requested value.
    ///
    /// The value is passed through exactly as the scenario wrote it; the
    /// control defines its own value space. Selecting via the DOM and
    /// reading the value back catches quantities the control does not offer.
    pub async fn select_quantity(&self, quantity: &str) -> Result<()> {
        wait_for_element(&self.page, QUANTITY_SELECT, self.wait).await?;

        let value = js_single_quoted(quantity);
        let expression = format!(
            "(() => {{ \
                const control = document.querySelector('{QUANTITY_SELECT}'); \
                control.value = '{value}'; \
                control.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                return control.value; \
            }})()"
        );
        let applied: String = self
            .page
            .evaluate(expression)
            .await?
            .into_value()
            .map_err(|e| Error::Cdp(e.to_string()))?;

        if applied != quantity {
            return Err(Error::Browser(format!(
                "quantity control does not offer {:?} (stayed at {:?})",
                quantity, applied
            )));
        }

        tracing::debug!("quantity set to {}", quantity);
        Ok(())
    }

    pub async fn add_to_cart(&self) -> Result<()> {
        let button = wait_for_element(&self.page, ADD_TO_CART_BUTTON, self.wait).await?;
        button.click().await?;
        tracing::debug!("add-to-cart clicked");
        Ok(())
    }

    /// Require the added-to-cart confirmation. Its absence within the wait
    /// bound fails the request.
    pub async fn assert_added_to_cart(&self) -> Result<()> {
        wait_for_element(&self.page, CONFIRMATION_MESSAGE, self.wait)
            .await
            .map_err(|e| match e {
                Error::ElementNotFound { waited, .. } => Error::ConfirmationMissing { waited },
                other => other,
            })?;
        Ok(())
    }
}

/// Escape a value for embedding in a single-quoted JS string literal.
///
/// The quantity is scenario-authored text; an unescaped quote or backslash
/// would break the script and surface as an opaque CDP error instead of the
/// quantity-not-offered diagnostic.
fn js_single_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_quantities_pass_through() {
        assert_eq!(js_single_quoted("2"), "2");
        assert_eq!(js_single_quoted("10+"), "10+");
    }

    #[test]
    fn test_quotes_and_backslashes_are_escaped() {
        assert_eq!(js_single_quoted("it's"), "it\\'s");
        assert_eq!(js_single_quoted("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_newlines_cannot_break_the_literal() {
        assert_eq!(js_single_quoted("1\n2"), "1\\n2");
        assert_eq!(js_single_quoted("1\r2"), "1\\r2");
    }
}
