//! Page objects for the storefront.
//!
//! Each object owns its selectors and exposes intent-level operations; step
//! definitions never touch selectors directly.

mod detail;
mod home;
mod results;

pub use detail::ProductDetailPage;
pub use home::HomePage;
pub use results::SearchResultsPage;
