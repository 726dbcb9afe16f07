pub mod aggregate;
pub mod candidate;
pub mod panel;
pub mod price_field;
