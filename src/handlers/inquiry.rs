use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};

use crate::coerce;
use crate::models::{InquiryRecord, InquiryStatus};
use crate::services::photo;
use crate::state::AppState;

const REQUIRED_FIELDS: [&str; 7] = [
    "ownerName",
    "phone",
    "email",
    "address",
    "dogName",
    "dogBreed",
    "dogWeight",
];

// This endpoint's CORS set carries no allow-methods entry.
const CORS: [(&str, &str); 2] = [
    ("access-control-allow-origin", "*"),
    (
        "access-control-allow-headers",
        "authorization, x-client-info, apikey, content-type",
    ),
];

const PHOTO_BUCKET: &str = "dog-photos";

pub async fn submit_inquiry(
    method: Method,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return super::preflight(&CORS);
    }

    match process(&state, &body).await {
        Ok(res) => res,
        Err(err) => {
            tracing::error!(error = %err, "inquiry processing failed");
            super::json_with_cors(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
                &CORS,
            )
        }
    }
}

async fn process(state: &AppState, body: &[u8]) -> anyhow::Result<Response> {
    // No dedicated parse branch here: a malformed body surfaces as a
    // generic 500 from the outer boundary.
    let inquiry: Value =
        serde_json::from_slice(body).context("inquiry request body is not valid JSON")?;

    if REQUIRED_FIELDS
        .iter()
        .any(|field| !coerce::is_truthy(&inquiry[*field]))
    {
        tracing::warn!("inquiry request missing required fields");
        return Ok(super::json_with_cors(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Missing required fields" }),
            &CORS,
        ));
    }

    let dog_photo_url = if coerce::is_truthy(&inquiry["dogPhoto"]) {
        store_photo(state, &coerce::text(&inquiry["dogPhoto"])).await
    } else {
        None
    };

    let record = InquiryRecord {
        owner_name: coerce::text(&inquiry["ownerName"]),
        phone: coerce::text(&inquiry["phone"]),
        email: coerce::text(&inquiry["email"]),
        address: coerce::text(&inquiry["address"]),
        dog_name: coerce::text(&inquiry["dogName"]),
        dog_breed: coerce::text(&inquiry["dogBreed"]),
        // No fallback on purpose: an unparsable weight inserts as null.
        dog_weight: coerce::parse_int(&inquiry["dogWeight"]),
        dog_photo_url,
        special_notes: if coerce::is_truthy(&inquiry["specialNotes"]) {
            Some(coerce::text(&inquiry["specialNotes"]))
        } else {
            None
        },
        status: InquiryStatus::New,
    };

    let inserted = match state
        .store
        .insert("customer_inquiries", serde_json::to_value(&record)?)
        .await
    {
        Ok(row) => row,
        Err(err) => {
            tracing::error!(error = %err, "failed to save inquiry");
            return Ok(super::json_with_cors(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to save inquiry" }),
                &CORS,
            ));
        }
    };

    Ok(super::json_with_cors(
        StatusCode::OK,
        json!({
            "success": true,
            "message": "Inquiry submitted successfully!",
            "data": inserted,
        }),
        &CORS,
    ))
}

/// Decode and upload the photo. Every failure is logged and the inquiry
/// proceeds without a photo URL; this path can never fail the request.
async fn store_photo(state: &AppState, data_url: &str) -> Option<String> {
    let bytes = match photo::decode_data_url(data_url) {
        Ok(b) => b,
        Err(err) => {
            tracing::error!(error = %err, "could not decode dog photo");
            return None;
        }
    };

    let object = photo::object_name();
    match state
        .storage
        .upload(PHOTO_BUCKET, &object, bytes, "image/jpeg", false)
        .await
    {
        Ok(()) => Some(state.storage.public_url(PHOTO_BUCKET, &object)),
        Err(err) => {
            tracing::error!(error = %err, object = %object, "dog photo upload failed");
            None
        }
    }
}
