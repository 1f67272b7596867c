use crate::{Error, Result};

/// Parse a displayed price into a whole-currency amount.
///
/// Storefronts render prices with locale grouping marks ("1,299", or a
/// narrow/no-break space in some locales). Grouping marks are stripped before
/// parsing; anything else that is not a digit is a fatal parse error, never
/// skipped. Parsing is idempotent: an already-bare "999" parses the same as
/// a grouped "1,299" once separators are removed.
pub fn parse_display_price(text: &str) -> Result<u64> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect();

    if digits.is_empty() {
        return Err(Error::PriceParse {
            text: text.trim().to_string(),
        });
    }

    digits.parse::<u64>().map_err(|_| Error::PriceParse {
        text: text.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_grouped_price() {
        assert_eq!(parse_display_price("1,299").unwrap(), 1299);
    }

    #[test]
    fn test_parses_bare_price() {
        assert_eq!(parse_display_price("999").unwrap(), 999);
    }

    #[test]
    fn test_grouped_and_bare_parse_identically() {
        assert_eq!(
            parse_display_price("129999").unwrap(),
            parse_display_price("1,29,999").unwrap()
        );
    }

    #[test]
    fn test_strips_nbsp_grouping() {
        assert_eq!(parse_display_price("12\u{a0}999").unwrap(), 12999);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(parse_display_price("  450 ").unwrap(), 450);
    }

    #[test]
    fn test_currency_symbol_is_fatal() {
        let err = parse_display_price("₹1,299").unwrap_err();
        assert!(matches!(err, Error::PriceParse { .. }));
    }

    #[test]
    fn test_fractional_price_is_fatal() {
        assert!(parse_display_price("1,299.00").is_err());
    }

    #[test]
    fn test_empty_text_is_fatal() {
        assert!(parse_display_price("").is_err());
        assert!(parse_display_price("   ").is_err());
    }
}
