use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};

use crate::coerce;
use crate::models::{BookingRecord, BookingStatus};
use crate::state::AppState;

/// Validation order is part of the contract: missing fields are reported
/// comma-joined in this order.
const REQUIRED_FIELDS: [&str; 8] = [
    "ownerName",
    "phone",
    "email",
    "address",
    "dogName",
    "dogBreed",
    "service",
    "duration",
];

const CORS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    (
        "access-control-allow-headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("access-control-allow-methods", "POST, OPTIONS"),
];

pub async fn create_booking(
    method: Method,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return super::preflight(&CORS);
    }

    // Parse failures get their own 400 branch, ahead of the generic boundary.
    let booking: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(error = %err, "booking request body is not valid JSON");
            return super::json_with_cors(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON in request body" }),
                &CORS,
            );
        }
    };

    match process(&state, booking).await {
        Ok(res) => res,
        Err(err) => {
            tracing::error!(error = %err, "booking processing failed");
            super::json_with_cors(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Something went wrong while processing your booking. Please try again.",
                    "details": err.to_string(),
                    "stack": format!("{err:?}"),
                }),
                &CORS,
            )
        }
    }
}

async fn process(state: &AppState, booking: Value) -> anyhow::Result<Response> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !coerce::is_truthy(&booking[*field]))
        .collect();

    if !missing.is_empty() {
        tracing::warn!(fields = %missing.join(", "), "booking request missing required fields");
        return Ok(super::json_with_cors(
            StatusCode::BAD_REQUEST,
            json!({ "error": format!("Missing required fields: {}", missing.join(", ")) }),
            &CORS,
        ));
    }

    let duration_hours = coerce::int_or(&booking["duration"], 1);
    let price_per_hour = coerce::float_or(&booking["pricePerHour"], 25.0);
    let total_amount = duration_hours as f64 * price_per_hour;

    let scheduled_datetime = if coerce::is_truthy(&booking["bookingDate"])
        && coerce::is_truthy(&booking["bookingTime"])
    {
        Some(format!(
            "{}T{}:00",
            coerce::text(&booking["bookingDate"]),
            coerce::text(&booking["bookingTime"])
        ))
    } else {
        None
    };

    let record = BookingRecord {
        owner_name: coerce::text(&booking["ownerName"]),
        phone: coerce::text(&booking["phone"]),
        email: coerce::text(&booking["email"]),
        address: coerce::text(&booking["address"]),
        dog_name: coerce::text(&booking["dogName"]),
        dog_breed: coerce::text(&booking["dogBreed"]),
        service_type: coerce::text(&booking["service"]),
        duration_hours,
        total_amount,
        scheduled_datetime: scheduled_datetime.clone(),
        calendar_event_id: None,
        status: BookingStatus::Pending,
    };

    let inserted = match state
        .store
        .insert("bookings", serde_json::to_value(&record)?)
        .await
    {
        Ok(row) => row,
        Err(err) => {
            tracing::error!(error = %err, code = ?err.code, "failed to save booking");
            return Ok(super::json_with_cors(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to save booking to database",
                    "details": err.message,
                    "hint": err.hint,
                    "code": err.code,
                }),
                &CORS,
            ));
        }
    };

    // Best-effort: the calendar call is awaited, but its failure never
    // changes the booking response.
    if let Some(start) = &scheduled_datetime {
        if state.calendar.has_credentials() {
            let summary = format!("{} for {}", record.service_type, record.dog_name);
            if let Err(err) = state.calendar.create_event(&summary, start).await {
                tracing::warn!(error = %err, "calendar event creation failed");
            }
        } else {
            tracing::debug!("calendar credentials not configured, skipping event");
        }
    }

    Ok(super::json_with_cors(
        StatusCode::OK,
        json!({
            "success": true,
            "message": "Booking created successfully! We will contact you to confirm your appointment.",
            "booking": inserted,
        }),
        &CORS,
    ))
}
