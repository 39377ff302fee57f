pub mod aggregate;
pub mod history;
pub mod logging;
pub mod status;
pub mod summary;
pub mod sync;
pub mod units;
pub mod water;
