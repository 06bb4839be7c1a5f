pub mod demo;
pub mod format;
pub mod summary;
pub mod weather;
