pub mod calendar;
pub mod photo;
pub mod storage;
pub mod store;
