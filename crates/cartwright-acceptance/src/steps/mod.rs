mod cart;
mod search;
pub(crate) mod tables;
