use chrono::{NaiveDate, NaiveTime};

use crate::models::{BusinessHours, Slot};

/// Generate every bookable start time for one day: `slot_minutes`-aligned
/// points from `start_hour:00` up to but excluding `end_hour:00`, in
/// increasing order. Pure function of its inputs; never consults the clock.
///
/// A `slot_minutes` that does not divide 60 drops the trailing partial slot
/// of each hour, because the loop bound is the hour.
///
/// TODO: subtract the configured break windows from the output.
pub fn generate_slots(date: NaiveDate, hours: &BusinessHours) -> Vec<Slot> {
    let mut slots = Vec::new();
    if hours.slot_minutes == 0 {
        return slots;
    }

    for hour in hours.start_hour..hours.end_hour {
        let mut minute = 0;
        while minute < 60 {
            if let Some(start_time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                slots.push(Slot { date, start_time });
            }
            minute += hours.slot_minutes;
        }
    }

    slots
}
