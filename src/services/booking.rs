use chrono::{Local, NaiveDate, NaiveTime};

use crate::errors::AppError;
use crate::models::Booking;
use crate::services::ledger::BookingLedger;

/// A booking attempt as it arrives from the caller: contact details, the
/// chosen day and service, and the selected slot (if any).
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub service: String,
    pub duration_minutes: i32,
}

/// Confirm a reservation: validate the request, re-check that the slot is
/// still free (the availability the caller saw may be stale), then append to
/// the ledger. Every rejection path leaves the ledger unchanged.
///
/// The check-then-act here is only safe under the single-writer assumption:
/// the ledger is serialized behind one process. Two independent processes
/// sharing a store can both pass the check before either saves; a multi-user
/// deployment needs an atomic conditional insert keyed on the time range.
pub fn confirm_booking(
    ledger: &mut BookingLedger,
    request: BookingRequest,
) -> Result<Booking, AppError> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.phone.trim().is_empty()
    {
        return Err(AppError::Validation(
            "name, email and phone are required".to_string(),
        ));
    }
    let time = request
        .time
        .ok_or_else(|| AppError::Validation("no slot selected".to_string()))?;
    if request.duration_minutes <= 0 {
        return Err(AppError::Validation(
            "duration must be a positive number of minutes".to_string(),
        ));
    }

    if !ledger.is_free(request.date, time, request.duration_minutes)? {
        return Err(AppError::SlotConflict);
    }

    let booking = Booking {
        name: request.name,
        email: request.email,
        phone: request.phone,
        date: request.date,
        time,
        service: request.service,
        duration_minutes: request.duration_minutes,
        created_at: Local::now().naive_local(),
    };
    ledger.save(booking.clone())?;

    Ok(booking)
}
