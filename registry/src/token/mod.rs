pub(crate) mod approval;
pub(crate) mod index;

mod enumeration;
mod lifecycle;
mod mint;
mod transfer;
mod views;

pub use views::TokenView;
