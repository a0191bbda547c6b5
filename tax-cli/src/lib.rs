pub mod batch;
pub mod console;
pub mod logging;
pub mod report;
pub mod utils;
