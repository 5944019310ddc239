pub mod session;
pub mod trade_record;
pub mod trade_store;
