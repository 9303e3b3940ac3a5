//! Utility modules shared by hosts and tests

pub mod logging;

pub use logging::init_logger;
