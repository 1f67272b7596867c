use anyhow::{Context, Result};
use cartwright_core::ProductRequest;

const ITEM: &str = "ITEM";
const PRICE_LESS_THAN: &str = "PRICE_LESS_THAN";
const QUANTITY: &str = "QUANTITY";

/// Convert a Gherkin data table (header row first) into typed requests.
///
/// Columns are matched by header name, not position, so scenarios may order
/// them freely. Row order is preserved; it determines processing order.
pub fn product_requests(rows: &[Vec<String>]) -> Result<Vec<ProductRequest>> {
    let (header, body) = rows
        .split_first()
        .context("data table has no header row")?;

    let column = |name: &str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| format!("data table is missing the {name} column"))
    };
    let item_col = column(ITEM)?;
    let price_col = column(PRICE_LESS_THAN)?;
    let quantity_col = column(QUANTITY)?;

    body.iter()
        .enumerate()
        .map(|(row_index, row)| {
            let cell = |col: usize| {
                row.get(col)
                    .map(String::as_str)
                    .with_context(|| format!("row {} is missing column {}", row_index + 1, col))
            };
            ProductRequest::parse(cell(item_col)?, cell(price_col)?, cell(quantity_col)?)
                .with_context(|| format!("row {} is invalid", row_index + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parses_rows_in_order() {
        let rows = vec![
            row(&["ITEM", "PRICE_LESS_THAN", "QUANTITY"]),
            row(&["wrist watch", "2000", "2"]),
            row(&["laptop bag", "1,500", "1"]),
        ];

        let requests = product_requests(&rows).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].item, "wrist watch");
        assert_eq!(requests[0].price_limit, 2000);
        assert_eq!(requests[1].item, "laptop bag");
        assert_eq!(requests[1].price_limit, 1500);
        assert_eq!(requests[1].quantity, "1");
    }

    #[test]
    fn test_columns_matched_by_name_not_position() {
        let rows = vec![
            row(&["QUANTITY", "ITEM", "PRICE_LESS_THAN"]),
            row(&["3", "book", "500"]),
        ];

        let requests = product_requests(&rows).unwrap();
        assert_eq!(requests[0].item, "book");
        assert_eq!(requests[0].price_limit, 500);
        assert_eq!(requests[0].quantity, "3");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let rows = vec![row(&["ITEM", "QUANTITY"]), row(&["book", "1"])];

        let err = product_requests(&rows).unwrap_err();
        assert!(err.to_string().contains(PRICE_LESS_THAN));
    }

    #[test]
    fn test_invalid_row_names_its_position() {
        let rows = vec![
            row(&["ITEM", "PRICE_LESS_THAN", "QUANTITY"]),
            row(&["book", "500", "1"]),
            row(&["", "500", "1"]),
        ];

        let err = product_requests(&rows).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_empty_table_is_an_error() {
        assert!(product_requests(&[]).is_err());
    }
}
