use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse displayed price {text:?} as an amount")]
    PriceParse { text: String },

    #[error("No product under {limit} found on the first results page")]
    NoCandidateUnderLimit { limit: u64 },

    #[error("Results view returned {names} product names but {prices} prices")]
    MismatchedColumns { names: usize, prices: usize },

    #[error("Invalid product request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
