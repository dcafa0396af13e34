use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::AppError;
use crate::models::Booking;
use crate::storage::BookingStore;

/// Half-open interval overlap: touching endpoints do not conflict, so a
/// booking ending at 10:00 coexists with one starting at 10:00.
pub fn overlaps(s1: NaiveDateTime, e1: NaiveDateTime, s2: NaiveDateTime, e2: NaiveDateTime) -> bool {
    s1 < e2 && s2 < e1
}

/// The authoritative set of all confirmed bookings, behind an injectable
/// store. Append-only: bookings are never mutated or removed.
pub struct BookingLedger {
    store: Box<dyn BookingStore>,
}

impl BookingLedger {
    pub fn new(store: Box<dyn BookingStore>) -> Self {
        Self { store }
    }

    pub fn load_all(&self) -> Result<Vec<Booking>, AppError> {
        self.store.load().map_err(AppError::storage)
    }

    /// True when no existing booking overlaps `[time, time + duration)` on
    /// the given date. Pure read.
    pub fn is_free(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        duration_minutes: i32,
    ) -> Result<bool, AppError> {
        let start = date.and_time(time);
        let end = start + Duration::minutes(duration_minutes as i64);

        let free = !self
            .load_all()?
            .iter()
            .any(|b| overlaps(b.starts_at(), b.ends_at(), start, end));
        Ok(free)
    }

    /// Append unconditionally and persist the whole set. Overlap enforcement
    /// belongs to the confirmation workflow, which re-checks `is_free` right
    /// before calling this.
    pub fn save(&mut self, booking: Booking) -> Result<(), AppError> {
        let mut bookings = self.load_all()?;
        bookings.push(booking);
        self.store.replace(&bookings).map_err(AppError::storage)
    }
}
