use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use chrono::{NaiveDate, NaiveTime};

use crate::errors::AppError;
use crate::services::calendar::generate_ics;
use crate::state::AppState;

// GET /calendar/:date/:time
//
// Under the no-overlap invariant a start time identifies at most one booking,
// so (date, time) is enough of a key.
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Path((raw_date, raw_time)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    // Strip .ics suffix if present
    let raw_time = raw_time.strip_suffix(".ics").unwrap_or(&raw_time);

    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date: {raw_date}")))?;
    let time = NaiveTime::parse_from_str(raw_time, "%H:%M")
        .map_err(|_| AppError::Validation(format!("invalid time: {raw_time}")))?;

    let booking = {
        let ledger = state.ledger.lock().unwrap();
        ledger
            .load_all()?
            .into_iter()
            .find(|b| b.date == date && b.time == time)
            .ok_or_else(|| AppError::NotFound(format!("no booking at {raw_date} {raw_time}")))?
    };

    let ics = generate_ics(&booking, &state.config.location);
    let filename = format!("booking-{}-{}.ics", raw_date, time.format("%H%M"));

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                &format!("attachment; filename=\"{filename}\""),
            ),
        ],
        ics,
    )
        .into_response())
}
