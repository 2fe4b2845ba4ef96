pub mod app;
pub mod config_store;
pub mod logging;
pub mod report;
pub mod share;
pub mod utils;
