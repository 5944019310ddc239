pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod load_month;
pub mod months;
pub mod sort;
