pub mod trade_provider;
