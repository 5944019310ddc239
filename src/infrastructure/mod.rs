pub mod provider;
pub mod render;
