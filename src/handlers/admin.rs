use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

/// Plain equality against the configured passphrase. Good enough for a
/// single-operator deployment; anything multi-user needs real auth.
fn check_auth(headers: &HeaderMap, expected_passphrase: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let passphrase = auth.strip_prefix("Bearer ").unwrap_or("");
    if passphrase != expected_passphrase {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/bookings
#[derive(Serialize)]
pub struct AdminBookingResponse {
    date: String,
    time: String,
    service: String,
    duration: i32,
    name: String,
    email: String,
    phone: String,
    created_at: String,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<AdminBookingResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_passphrase)?;

    let mut bookings = {
        let ledger = state.ledger.lock().unwrap();
        ledger.load_all()?
    };
    bookings.sort_by_key(|b| b.starts_at());

    let response: Vec<AdminBookingResponse> = bookings
        .into_iter()
        .map(|b| AdminBookingResponse {
            date: b.date.format("%Y-%m-%d").to_string(),
            time: b.time.format("%H:%M").to_string(),
            service: b.service,
            duration: b.duration_minutes,
            name: b.name,
            email: b.email,
            phone: b.phone,
            created_at: b.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        })
        .collect();

    Ok(Json(response))
}
