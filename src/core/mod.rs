pub mod backup;
pub mod charts;
pub mod crud;
pub mod listing;
pub mod log;
pub mod sample;
pub mod scoring;
pub mod validate;
