pub mod active;
pub mod book;
pub mod config;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod update;
pub mod worked;
