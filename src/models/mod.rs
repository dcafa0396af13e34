pub mod booking;
pub mod hours;
pub mod slot;

pub use booking::Booking;
pub use hours::{BreakWindow, BusinessHours};
pub use slot::Slot;
