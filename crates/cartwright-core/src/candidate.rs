use crate::{Error, Result, price::parse_display_price};

/// One product from the results view: display name, parsed price, and its
/// zero-based position in on-screen order. Transient; it lives only while
/// one request is being evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProduct {
    pub name: String,
    pub price: u64,
    pub position: usize,
}

/// Merge the results view's two index-aligned sequences (names, price texts)
/// into one ordered list of candidates.
///
/// The sequences must have equal length. A mismatch (e.g. a promotional tile
/// carrying a link but no price) would shift every later pair by one and
/// silently select the wrong product, so it fails fast instead of truncating.
/// Any unparseable price text is fatal, never skipped.
pub fn pair_candidates(names: Vec<String>, price_texts: Vec<String>) -> Result<Vec<CandidateProduct>> {
    if names.len() != price_texts.len() {
        return Err(Error::MismatchedColumns {
            names: names.len(),
            prices: price_texts.len(),
        });
    }

    names
        .into_iter()
        .zip(price_texts)
        .enumerate()
        .map(|(position, (name, text))| {
            let price = parse_display_price(&text)?;
            Ok(CandidateProduct {
                name,
                price,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_listed_order() {
        let candidates = pair_candidates(
            vec!["Phone X".to_string(), "Phone Y".to_string()],
            vec!["15,000".to_string(), "8,999".to_string()],
        )
        .unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Phone X");
        assert_eq!(candidates[0].price, 15000);
        assert_eq!(candidates[0].position, 0);
        assert_eq!(candidates[1].name, "Phone Y");
        assert_eq!(candidates[1].price, 8999);
        assert_eq!(candidates[1].position, 1);
    }

    #[test]
    fn test_empty_sequences_pair_to_empty() {
        assert!(pair_candidates(vec![], vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let err = pair_candidates(
            vec!["Phone X".to_string(), "Sponsored".to_string()],
            vec!["15,000".to_string()],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::MismatchedColumns { names: 2, prices: 1 }
        ));
    }

    #[test]
    fn test_malformed_price_is_fatal_not_skipped() {
        let err = pair_candidates(
            vec!["Phone X".to_string(), "Phone Y".to_string()],
            vec!["15,000".to_string(), "N/A".to_string()],
        )
        .unwrap_err();

        assert!(matches!(err, Error::PriceParse { .. }));
    }
}
