use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::slots::generate_slots;
use crate::state::AppState;

// GET /api/availability
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
    pub duration: i32,
}

#[derive(Serialize)]
pub struct SlotAvailability {
    pub time: String,
    pub free: bool,
}

pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<SlotAvailability>>, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date: {}", query.date)))?;
    if query.duration <= 0 {
        return Err(AppError::Validation(
            "duration must be a positive number of minutes".to_string(),
        ));
    }

    let ledger = state.ledger.lock().unwrap();
    let response = generate_slots(date, &state.config.hours)
        .into_iter()
        .map(|slot| {
            Ok(SlotAvailability {
                time: slot.start_time.format("%H:%M").to_string(),
                free: ledger.is_free(date, slot.start_time, query.duration)?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(response))
}
