pub mod date_window;
pub mod month_key;
pub mod profit_factor;
pub mod sort;
pub mod ticket;
pub mod trade_side;
