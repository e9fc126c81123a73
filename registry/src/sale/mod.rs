mod purchase;
mod types;
mod views;

pub use types::{SaleTier, SaleTierUpdate};
pub(crate) use types::SaleState;
