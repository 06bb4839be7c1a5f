pub mod backdrop;
pub mod current;
pub mod daily;
pub mod detail;
pub mod hourly;
pub mod neo;
pub mod search;
mod shared;
