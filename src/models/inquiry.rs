use serde::{Deserialize, Serialize};

/// Row shape of the `customer_inquiries` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryRecord {
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub dog_name: String,
    pub dog_breed: String,
    /// Parsed with no fallback: an unparsable weight inserts as null.
    pub dog_weight: Option<i64>,
    /// Set only when the photo upload succeeded.
    pub dog_photo_url: Option<String>,
    pub special_notes: Option<String>,
    pub status: InquiryStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    Contacted,
    Closed,
}
