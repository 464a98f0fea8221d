pub mod add;
pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod status;
