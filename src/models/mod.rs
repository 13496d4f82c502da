pub mod booking;
pub mod inquiry;

pub use booking::{BookingRecord, BookingStatus};
pub use inquiry::{InquiryRecord, InquiryStatus};
