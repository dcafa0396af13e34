use crate::models::Booking;

/// Render a booking as a single-event iCalendar document. Byte-reproducible
/// from the booking fields alone: the UID is derived from `created_at`, not
/// from a random identifier. Times are the device-local naive values stamped
/// `Z`, in line with the single-device model.
pub fn generate_ics(booking: &Booking, location: &str) -> String {
    let dtstart = booking.starts_at().format("%Y%m%dT%H%M%SZ").to_string();
    let dtend = booking.ends_at().format("%Y%m%dT%H%M%SZ").to_string();
    let dtstamp = booking.created_at.format("%Y%m%dT%H%M%SZ").to_string();
    let uid = format!(
        "booking-{}@slotbook.local",
        booking.created_at.format("%Y%m%dT%H%M%S")
    );

    let summary = format!("{} - {}", booking.service, booking.name);
    let description = format!("Booking with {}. Tel:{}", booking.name, booking.phone);

    format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Slotbook//Bookings//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         DESCRIPTION:{description}\r\n\
         LOCATION:{location}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    )
}
