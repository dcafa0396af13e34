use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Booking;
use crate::services::booking::{confirm_booking, BookingRequest};
use crate::state::AppState;

// POST /api/bookings
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: Option<String>,
    pub service: String,
    pub duration: i32,
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub duration: i32,
    pub created_at: String,
    /// Path the caller can fetch the .ics invite from.
    pub calendar: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        let date = b.date.format("%Y-%m-%d").to_string();
        let time = b.time.format("%H:%M").to_string();
        BookingResponse {
            calendar: format!("/calendar/{date}/{time}.ics"),
            name: b.name,
            email: b.email,
            phone: b.phone,
            date,
            time,
            service: b.service,
            duration: b.duration_minutes,
            created_at: b.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let date = NaiveDate::parse_from_str(&body.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date: {}", body.date)))?;
    let time = body
        .time
        .map(|t| {
            NaiveTime::parse_from_str(&t, "%H:%M")
                .map_err(|_| AppError::Validation(format!("invalid time: {t}")))
        })
        .transpose()?;

    let request = BookingRequest {
        name: body.name,
        email: body.email,
        phone: body.phone,
        date,
        time,
        service: body.service,
        duration_minutes: body.duration,
    };

    let booking = {
        let mut ledger = state.ledger.lock().unwrap();
        confirm_booking(&mut ledger, request)?
    };

    tracing::info!(
        date = %booking.date,
        time = %booking.time.format("%H:%M"),
        service = %booking.service,
        "booking confirmed"
    );

    Ok((StatusCode::CREATED, Json(booking.into())))
}
