pub mod candidate;
pub mod error;
pub mod price;
pub mod request;
pub mod selector;

pub use candidate::{CandidateProduct, pair_candidates};
pub use error::{Error, Result};
pub use price::parse_display_price;
pub use request::{CartAddition, ProductRequest};
pub use selector::first_under_limit;
