pub mod book;
pub mod log;
pub mod store;
pub mod worktime;
