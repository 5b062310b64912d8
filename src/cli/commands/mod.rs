pub mod add;
pub mod backup;
pub mod chat;
pub mod config;
pub mod db;
pub mod del;
pub mod device;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod notify;
pub mod predict;
pub mod stats;
