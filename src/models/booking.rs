use serde::{Deserialize, Serialize};

/// Row shape of the `bookings` table. Created exactly once per successful
/// request; there is no update or delete path in this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub dog_name: String,
    pub dog_breed: String,
    pub service_type: String,
    pub duration_hours: i64,
    pub total_amount: f64,
    /// Local timestamp `<date>T<time>:00`, present iff the request carried
    /// both a booking date and a booking time.
    pub scheduled_datetime: Option<String>,
    /// Reserved for the calendar integration; always null at creation.
    pub calendar_event_id: Option<String>,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}
