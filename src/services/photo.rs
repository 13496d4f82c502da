use anyhow::Context;
use base64::Engine;

/// Extract and decode the base64 payload of a `data:<mime>;base64,<payload>`
/// URL. The prefix before the comma is not inspected.
pub fn decode_data_url(data_url: &str) -> anyhow::Result<Vec<u8>> {
    let (_, payload) = data_url
        .split_once(',')
        .context("data URL has no payload separator")?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .context("invalid base64 in data URL payload")
}

/// Unique object name for an uploaded photo: millisecond timestamp plus a
/// random suffix, always stored as `.jpg`.
pub fn object_name() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("dog-photo-{}-{}.jpg", millis, &uuid[..6])
}
