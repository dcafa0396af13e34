pub mod booking;
pub mod calendar;
pub mod ledger;
pub mod slots;
