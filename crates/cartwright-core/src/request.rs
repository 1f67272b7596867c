use crate::{Error, Result, price::parse_display_price};
use serde::{Deserialize, Serialize};

/// One row of the scenario data table, typed at the boundary.
///
/// The quantity is kept as the raw string from the table: the detail view's
/// quantity control defines its own value space (numeric or label-based) and
/// the harness passes it through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub item: String,
    pub price_limit: u64,
    pub quantity: String,
}

impl ProductRequest {
    /// Build a request from raw table cells, validating each field.
    ///
    /// Validation failures surface here, at the step boundary, rather than
    /// being deferred into the selection logic.
    pub fn parse(item: &str, price_limit: &str, quantity: &str) -> Result<Self> {
        let item = item.trim();
        if item.is_empty() {
            return Err(Error::InvalidRequest("ITEM must not be empty".to_string()));
        }

        let price_limit = parse_display_price(price_limit)
            .map_err(|e| Error::InvalidRequest(format!("PRICE_LESS_THAN: {e}")))?;
        if price_limit == 0 {
            return Err(Error::InvalidRequest(
                "PRICE_LESS_THAN must be positive".to_string(),
            ));
        }

        let quantity = quantity.trim();
        if quantity.is_empty() {
            return Err(Error::InvalidRequest(
                "QUANTITY must not be empty".to_string(),
            ));
        }

        Ok(Self {
            item: item.to_string(),
            price_limit,
            quantity: quantity.to_string(),
        })
    }
}

/// Outcome of one successful add-to-cart, recorded for end-of-scenario
/// assertions. Remote cart state itself is not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartAddition {
    pub item: String,
    pub quantity: String,
}
