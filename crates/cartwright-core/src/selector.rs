use crate::{CandidateProduct, Error, Result};

/// Pick the first candidate, in on-screen order, priced strictly below the
/// limit.
///
/// First match, not cheapest match: the scan stops at the lowest index that
/// qualifies. A price exactly equal to the limit does not qualify. When no
/// candidate on the (first and only) results page qualifies, the request
/// fails hard; pagination is never attempted.
pub fn first_under_limit(candidates: &[CandidateProduct], limit: u64) -> Result<&CandidateProduct> {
    let selected = candidates
        .iter()
        .find(|c| c.price < limit)
        .ok_or(Error::NoCandidateUnderLimit { limit })?;

    tracing::debug!(
        name = %selected.name,
        price = selected.price,
        position = selected.position,
        limit,
        "candidate selected under price limit"
    );

    Ok(selected)
}
